//! Rule-based advisory text generation
//!
//! Stateless text synthesis over the projection and metric outputs. Every
//! function takes the language tag explicitly; there is no ambient locale
//! state, and each call is a pure function of the plan snapshot it is given.
//! Phrasing is hand-written per language, never machine-derived from the
//! other one.

mod intent;
mod lang;

pub use intent::{classify_intent, Intent};
pub use lang::{format_amount, format_manat, Lang};

use crate::metrics::{
    education_forecast, final_split_values, final_value, profit, recommended_monthly_increase,
    total_contributed,
};
use crate::plan::{PlanDescriptor, PlanVariant, RiskTier};
use crate::projection::ProjectionEngine;
use serde::{Deserialize, Serialize};

/// One post-horizon suggestion card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Localized display label for a risk tier
pub fn risk_label(tier: RiskTier, lang: Lang) -> &'static str {
    match (tier, lang) {
        (RiskTier::Low, Lang::Az) => "Aşağı risk",
        (RiskTier::Medium, Lang::Az) => "Orta risk",
        (RiskTier::High, Lang::Az) => "Yüksək risk",
        (RiskTier::Low, Lang::En) => "Low risk",
        (RiskTier::Medium, Lang::En) => "Medium risk",
        (RiskTier::High, Lang::En) => "High risk",
    }
}

/// Localized display label for a plan variant
pub fn plan_variant_label(variant: PlanVariant, lang: Lang) -> &'static str {
    match (variant, lang) {
        (PlanVariant::Standard, Lang::Az) => "Standart (İnvestisiya əsaslı)",
        (PlanVariant::Safe, Lang::Az) => "Təhlükəsiz (Yığım + İnvestisiya)",
        (PlanVariant::Standard, Lang::En) => "Standard (investment based)",
        (PlanVariant::Safe, Lang::En) => "Safe (savings + investment)",
    }
}

/// Localized display name for a study region
pub fn region_name(region: crate::assumptions::Region, lang: Lang) -> &'static str {
    use crate::assumptions::Region;
    match (region, lang) {
        (Region::Local, Lang::Az) => "Azərbaycan",
        (Region::Europe, Lang::Az) => "Avropa",
        (Region::UnitedStates, Lang::Az) => "ABŞ",
        (Region::Local, Lang::En) => "Azerbaijan",
        (Region::Europe, Lang::En) => "Europe",
        (Region::UnitedStates, Lang::En) => "US",
    }
}

/// Generate the ordered insight list for a plan
///
/// Always opens with the variant summary and the local-education
/// affordability sentence. A risk remark follows for the high and low tiers
/// only, and a recommended-increase sentence closes the list when the plan
/// falls short of the Europe target and a positive increase exists.
pub fn generate_insights(
    engine: &ProjectionEngine,
    plan: &PlanDescriptor,
    lang: Lang,
) -> Vec<String> {
    let value = final_value(engine, plan);
    let contributed = total_contributed(plan);
    let net_profit = profit(engine, plan);
    let education = education_forecast(engine, plan.plan_duration_years);
    let years = plan.plan_duration_years;

    let mut insights = Vec::new();

    match plan.plan_variant {
        PlanVariant::Safe => {
            let split = final_split_values(engine, plan);
            insights.push(match lang {
                Lang::Az => format!(
                    "Təhlükəsiz plan seçmisiniz. {years} il ərzində yığım hissəsi {}, investisiya hissəsi {} olmaqla ümumi {} proqnozlaşdırılır.",
                    format_manat(split.savings),
                    format_manat(split.investment),
                    format_manat(split.total),
                ),
                Lang::En => format!(
                    "You've selected the Safe plan. Over {years} years, the savings portion will be {}, investment portion {}, for a total projection of {}.",
                    format_manat(split.savings),
                    format_manat(split.investment),
                    format_manat(split.total),
                ),
            });
        }
        PlanVariant::Standard => {
            insights.push(match lang {
                Lang::Az => format!(
                    "Planınız {years} il ərzində {} investisiya ilə təxminən {} gəlir gətirəcək. Bu, {} xalis mənfəət deməkdir.",
                    format_manat(contributed),
                    format_manat(value),
                    format_manat(net_profit),
                ),
                Lang::En => format!(
                    "Your plan will generate approximately {} over {years} years with {} total investment. That's {} net profit.",
                    format_manat(value),
                    format_manat(contributed),
                    format_manat(net_profit),
                ),
            });
        }
    }

    let local_cost = education[0].projected_cost;
    if value >= local_cost {
        insights.push(match lang {
            Lang::Az => format!(
                "Proqnozlaşdırılan məbləğ Azərbaycanda universitetin tam xərclərini ({}) ödəmək üçün kifayət edəcək.",
                format_manat(local_cost),
            ),
            Lang::En => format!(
                "The projected amount will be sufficient to cover full university costs in Azerbaijan ({}).",
                format_manat(local_cost),
            ),
        });
    } else {
        let shortfall = local_cost - value;
        insights.push(match lang {
            Lang::Az => format!(
                "Azərbaycanda universitetin tam xərci {} olacaq. Planınız ilə {} fərq var. Aylıq investisiyanı artırmağı tövsiyə edirik.",
                format_manat(local_cost),
                format_manat(shortfall),
            ),
            Lang::En => format!(
                "Full university cost in Azerbaijan will be {}. There's a {} gap with your plan. We recommend increasing your monthly investment.",
                format_manat(local_cost),
                format_manat(shortfall),
            ),
        });
    }

    match plan.risk_tier {
        RiskTier::High => insights.push(
            match lang {
                Lang::Az => "Yüksək risk profili seçmisiniz. Uzunmüddətli investisiyalarda yüksək risk daha çox gəlir potensialı verir, amma qısamüddətli dalğalanmalar ola bilər.",
                Lang::En => "You've selected a high-risk profile. Long-term high-risk investments offer greater return potential, but short-term fluctuations may occur.",
            }
            .to_string(),
        ),
        RiskTier::Low => insights.push(
            match lang {
                Lang::Az => "Aşağı risk profili ilə investisiyanız daha stabil olacaq. Gəlir potensialını artırmaq üçün orta risk profilinə keçməyi düşünə bilərsiniz.",
                Lang::En => "With a low-risk profile, your investment will be more stable. Consider switching to medium risk to increase return potential.",
            }
            .to_string(),
        ),
        RiskTier::Medium => {}
    }

    let europe_cost = education[1].projected_cost;
    if value < europe_cost {
        let increase = recommended_monthly_increase(engine, plan, europe_cost);
        if increase > 0.0 {
            insights.push(match lang {
                Lang::Az => format!(
                    "Avropada təhsil planı üçün aylıq investisiyanızı {} artırmağınız tövsiyə olunur.",
                    format_manat(increase),
                ),
                Lang::En => format!(
                    "For a European education plan, we recommend increasing your monthly investment by {}.",
                    format_manat(increase),
                ),
            });
        }
    }

    insights
}

/// Exactly three suggestions for what to do with the funds after the horizon
pub fn post_horizon_suggestions(
    engine: &ProjectionEngine,
    plan: &PlanDescriptor,
    lang: Lang,
) -> [Suggestion; 3] {
    let value = format_manat(final_value(engine, plan));

    match lang {
        Lang::Az => [
            Suggestion {
                icon: "🎓".to_string(),
                title: "Xaricdə təhsil planı".to_string(),
                description: format!(
                    "{value} ilə Avropa və ya ABŞ-da bakalavr təhsili üçün büdcə planlaşdırın."
                ),
            },
            Suggestion {
                icon: "📈".to_string(),
                title: "Davamlı investisiya planı".to_string(),
                description: "Toplanmış məbləği çıxarmadan investisiyaya davam edin. 25 yaşına qədər məbləğ 2x arta bilər.".to_string(),
            },
            Suggestion {
                icon: "🚀".to_string(),
                title: "Start-up kapital planı".to_string(),
                description: format!(
                    "{value} start-up kapitalı kimi istifadə edilə bilər. Texnologiya sektorunda yeni şirkət qurmaq üçün yetərlidir."
                ),
            },
        ],
        Lang::En => [
            Suggestion {
                icon: "🎓".to_string(),
                title: "Study abroad plan".to_string(),
                description: format!(
                    "Plan a budget for a bachelor's degree in Europe or the US with {value}."
                ),
            },
            Suggestion {
                icon: "📈".to_string(),
                title: "Continued investment plan".to_string(),
                description: "Continue investing without withdrawing. The amount could double by age 25.".to_string(),
            },
            Suggestion {
                icon: "🚀".to_string(),
                title: "Start-up capital plan".to_string(),
                description: format!(
                    "{value} can be used as start-up capital. It's sufficient to start a new company in the tech sector."
                ),
            },
        ],
    }
}

/// Greeting shown when the advisor chat opens, built from the first insight
pub fn welcome_message(engine: &ProjectionEngine, plan: &PlanDescriptor, lang: Lang) -> String {
    let insights = generate_insights(engine, plan, lang);
    let first = insights.first().cloned().unwrap_or_default();

    match lang {
        Lang::Az => format!(
            "Salam! Mən sizin AI Maliyyə Məsləhətçinizəm.\n\nPlanınızı analiz etdim. İlk müşahidəm:\n\n{first}\n\nMənə suallarınızı verə bilərsiniz!"
        ),
        Lang::En => format!(
            "Hello! I'm your AI financial advisor.\n\nI've analyzed your plan. My first observation:\n\n{first}\n\nFeel free to ask me questions!"
        ),
    }
}

/// Answer a free-text question about the plan
///
/// The query is routed through the keyword classifier and answered from the
/// current plan snapshot; there is no conversation state on this side.
pub fn answer_query(
    engine: &ProjectionEngine,
    plan: &PlanDescriptor,
    lang: Lang,
    query: &str,
) -> String {
    match classify_intent(query, lang) {
        Intent::Education => education_answer(engine, plan, lang),
        Intent::Advice => advice_answer(engine, plan, lang),
        Intent::PostHorizon => post_horizon_answer(engine, plan, lang),
        Intent::Risk => risk_answer(plan, lang),
        Intent::Fallback => fallback_answer(engine, plan, lang),
    }
}

fn education_answer(engine: &ProjectionEngine, plan: &PlanDescriptor, lang: Lang) -> String {
    let forecast = education_forecast(engine, plan.plan_duration_years);
    let value = final_value(engine, plan);
    let years = plan.plan_duration_years;

    let lines: Vec<String> = forecast
        .iter()
        .map(|entry| match lang {
            Lang::Az => format!(
                "- {}: {} (4 illik)\n  Hal-hazırda: {}",
                region_name(entry.region, lang),
                format_manat(entry.projected_cost),
                format_manat(entry.current_four_year_cost),
            ),
            Lang::En => format!(
                "- {}: {} (4-year)\n  Today: {}",
                region_name(entry.region, lang),
                format_manat(entry.projected_cost),
                format_manat(entry.current_four_year_cost),
            ),
        })
        .collect();

    let verdict = if value >= forecast[0].projected_cost {
        match lang {
            Lang::Az => "Azərbaycanda təhsil xərclərini tam ödəyə bilərsiniz!",
            Lang::En => "You can fully cover university costs in Azerbaijan!",
        }
    } else {
        match lang {
            Lang::Az => "Hədəfə çatmaq üçün aylıq investisiyanı artırmağı tövsiyə edirik.",
            Lang::En => "We recommend increasing your monthly investment to reach the goal.",
        }
    };

    match lang {
        Lang::Az => format!(
            "Təhsil Xərcləri Proqnozu ({years} il sonra)\n\n{}\n\nSizin proqnozlaşdırılan məbləğ: {}\n\n{verdict}",
            lines.join("\n"),
            format_manat(value),
        ),
        Lang::En => format!(
            "Education Cost Forecast (in {years} years)\n\n{}\n\nYour projected amount: {}\n\n{verdict}",
            lines.join("\n"),
            format_manat(value),
        ),
    }
}

fn advice_answer(engine: &ProjectionEngine, plan: &PlanDescriptor, lang: Lang) -> String {
    // The summary insight opens the chat already, so only the rest is shown
    let body: Vec<String> = generate_insights(engine, plan, lang)
        .into_iter()
        .skip(1)
        .map(|insight| format!("- {insight}"))
        .collect();

    match lang {
        Lang::Az => format!("İnvestisiya Məsləhəti\n\n{}", body.join("\n\n")),
        Lang::En => format!("Investment Advice\n\n{}", body.join("\n\n")),
    }
}

fn post_horizon_answer(engine: &ProjectionEngine, plan: &PlanDescriptor, lang: Lang) -> String {
    let cards: Vec<String> = post_horizon_suggestions(engine, plan, lang)
        .iter()
        .map(|s| format!("{} {}\n{}", s.icon, s.title, s.description))
        .collect();

    match lang {
        Lang::Az => format!("18 Yaş Sonrası Planlar\n\n{}", cards.join("\n\n")),
        Lang::En => format!("Plans After Age 18\n\n{}", cards.join("\n\n")),
    }
}

fn risk_answer(plan: &PlanDescriptor, lang: Lang) -> String {
    let label = risk_label(plan.risk_tier, lang);

    let paragraph = match (plan.risk_tier, lang) {
        (RiskTier::Low, Lang::Az) => "Aşağı risk sabit gəlir verir, amma uzunmüddətli gəlir potensialı məhduddur. Uşağın yaşı kiçikdirsə, orta riskə keçmək daha faydalı ola bilər.",
        (RiskTier::Medium, Lang::Az) => "Orta risk optimal balansı təmin edir. Uzunmüddətli investisiya üçün ən çox tövsiyə olunan profildir.",
        (RiskTier::High, Lang::Az) => "Yüksək risk ən böyük gəlir potensialını verir, amma qısamüddətli dalğalanmalar çox ola bilər. Uşağın yaşı 0-5 arasındadırsa, bu profil uyğundur.",
        (RiskTier::Low, Lang::En) => "Low risk provides stable returns, but long-term return potential is limited. If your child is young, switching to medium risk may be more beneficial.",
        (RiskTier::Medium, Lang::En) => "Medium risk provides the optimal balance. It is the most recommended profile for long-term investing.",
        (RiskTier::High, Lang::En) => "High risk offers the greatest return potential, but short-term fluctuations can be significant. If your child is between 0 and 5, this profile is a good fit.",
    };

    match lang {
        Lang::Az => format!(
            "Risk Profili Analizi\n\nHal-hazırda \"{label}\" profili seçmisiniz.\n\n{paragraph}"
        ),
        Lang::En => format!(
            "Risk Profile Analysis\n\nYou have currently selected the \"{label}\" profile.\n\n{paragraph}"
        ),
    }
}

fn fallback_answer(engine: &ProjectionEngine, plan: &PlanDescriptor, lang: Lang) -> String {
    let value = final_value(engine, plan);
    let europe_cost = education_forecast(engine, plan.plan_duration_years)[1].projected_cost;
    let increase = recommended_monthly_increase(engine, plan, europe_cost);

    let mut answer = match lang {
        Lang::Az => format!(
            "Mən aşağıdakı mövzularda kömək edə bilərəm:\n\n- Təhsil xərcləri proqnozu\n- İnvestisiya məsləhəti\n- 18 yaş sonrası planlar\n- Risk analizi\n\nProqnozlaşdırılan dəyər: {}",
            format_manat(value),
        ),
        Lang::En => format!(
            "I can help with the following topics:\n\n- Education cost forecast\n- Investment advice\n- Plans after age 18\n- Risk analysis\n\nProjected value: {}",
            format_manat(value),
        ),
    };

    if increase > 0.0 {
        answer.push_str(&match lang {
            Lang::Az => format!(
                "\n\nTövsiyə: Avropada təhsil üçün aylıq {} əlavə investisiya edin.",
                format_manat(increase),
            ),
            Lang::En => format!(
                "\n\nTip: invest an extra {} per month for an education in Europe.",
                format_manat(increase),
            ),
        });
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(risk_tier: RiskTier, plan_variant: PlanVariant) -> PlanDescriptor {
        PlanDescriptor {
            parent_age: 32,
            child_age: 0,
            plan_duration_years: 18,
            monthly_contribution: 200.0,
            risk_tier,
            plan_variant,
        }
    }

    #[test]
    fn test_insights_order_for_medium_standard() {
        let engine = ProjectionEngine::default();
        let insights = generate_insights(
            &engine,
            &plan(RiskTier::Medium, PlanVariant::Standard),
            Lang::En,
        );

        // Summary, affordability, Europe increase; no risk remark for medium
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("net profit"));
        assert!(insights[1].contains("Azerbaijan"));
        assert!(insights[2].contains("increasing your monthly investment by"));
    }

    #[test]
    fn test_insights_include_risk_remark_for_high_and_low() {
        let engine = ProjectionEngine::default();

        let high = generate_insights(&engine, &plan(RiskTier::High, PlanVariant::Standard), Lang::En);
        assert!(high.iter().any(|i| i.contains("high-risk profile")));

        let low = generate_insights(&engine, &plan(RiskTier::Low, PlanVariant::Standard), Lang::En);
        assert!(low.iter().any(|i| i.contains("low-risk profile")));
    }

    #[test]
    fn test_safe_summary_reports_buckets() {
        let engine = ProjectionEngine::default();
        let insights =
            generate_insights(&engine, &plan(RiskTier::Medium, PlanVariant::Safe), Lang::Az);
        assert!(insights[0].contains("Təhlükəsiz plan"));
        assert!(insights[0].contains("yığım hissəsi"));
    }

    #[test]
    fn test_post_horizon_fixed_order() {
        let engine = ProjectionEngine::default();
        let suggestions =
            post_horizon_suggestions(&engine, &plan(RiskTier::Medium, PlanVariant::Standard), Lang::En);

        assert_eq!(suggestions[0].icon, "🎓");
        assert_eq!(suggestions[1].icon, "📈");
        assert_eq!(suggestions[2].icon, "🚀");
        assert_eq!(suggestions[1].title, "Continued investment plan");
    }

    #[test]
    fn test_answer_query_routes_education() {
        let engine = ProjectionEngine::default();
        let p = plan(RiskTier::Medium, PlanVariant::Standard);

        let az = answer_query(&engine, &p, Lang::Az, "təhsil xərcləri nə qədər olacaq?");
        assert!(az.starts_with("Təhsil Xərcləri Proqnozu"));

        let en = answer_query(&engine, &p, Lang::En, "How much will university cost?");
        assert!(en.starts_with("Education Cost Forecast"));
    }

    #[test]
    fn test_answer_query_risk_names_current_tier() {
        let engine = ProjectionEngine::default();
        let p = plan(RiskTier::High, PlanVariant::Standard);
        let answer = answer_query(&engine, &p, Lang::En, "what about my risk?");
        assert!(answer.contains("\"High risk\""));
    }

    #[test]
    fn test_answer_query_fallback_lists_topics() {
        let engine = ProjectionEngine::default();
        let p = plan(RiskTier::Medium, PlanVariant::Standard);
        let answer = answer_query(&engine, &p, Lang::En, "hello there");
        assert!(answer.contains("Education cost forecast"));
        assert!(answer.contains("Projected value"));
    }

    #[test]
    fn test_advice_answer_skips_summary_insight() {
        let engine = ProjectionEngine::default();
        let p = plan(RiskTier::Medium, PlanVariant::Standard);
        let insights = generate_insights(&engine, &p, Lang::En);
        let answer = answer_query(&engine, &p, Lang::En, "any advice?");
        assert!(!answer.contains(&insights[0]));
        assert!(answer.contains(&insights[1]));
    }

    #[test]
    fn test_welcome_message_embeds_first_insight() {
        let engine = ProjectionEngine::default();
        let p = plan(RiskTier::Medium, PlanVariant::Safe);
        let first = generate_insights(&engine, &p, Lang::Az)[0].clone();
        assert!(welcome_message(&engine, &p, Lang::Az).contains(&first));
    }
}
