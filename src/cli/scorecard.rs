//! CLI handlers for the scorecard statistics views.

use crate::config::LucidConfig;
use crate::scorecard::DemographicValue;

/// Handle `lucid rates`.
pub async fn handle_rates() -> Result<(), Box<dyn std::error::Error>> {
    let client = LucidConfig::from_env().scorecard_client();
    let rates = client.delirium_rates().await?;

    println!("📊 Delirium Rates\n");
    for rate in rates {
        println!(
            "  {} {} {}: {:.1}%",
            rate.quarter, rate.year, rate.ward, rate.rate
        );
    }
    Ok(())
}

/// Handle `lucid trends`.
pub async fn handle_trends() -> Result<(), Box<dyn std::error::Error>> {
    let client = LucidConfig::from_env().scorecard_client();
    let trends = client.time_trends().await?;

    println!("📈 Time Trends (GIM vs other wards)\n");
    for point in trends {
        println!(
            "  {}: GIM {:.1}% | other wards {:.1}%",
            point.period, point.gim, point.other_wards
        );
    }
    Ok(())
}

/// Handle `lucid demographics`.
pub async fn handle_demographics() -> Result<(), Box<dyn std::error::Error>> {
    let client = LucidConfig::from_env().scorecard_client();
    let demographics = client.patient_demographics().await?;

    println!(
        "🧾 Patient Demographics ({} {})\n",
        demographics.recent_quarter, demographics.recent_year
    );
    let mut names: Vec<&String> = demographics.data.keys().collect();
    names.sort();
    for name in names {
        let item = &demographics.data[name];
        println!(
            "  {name}: recent {} | training {} | SMD {}",
            format_value(&item.recent),
            format_value(&item.training),
            format_value(&item.standard_mean_difference),
        );
    }
    Ok(())
}

fn format_value(value: &DemographicValue) -> String {
    let Some(measured) = value.value else {
        return "n/a".to_string();
    };
    let mut out = format!("{measured:.1}");
    if let Some(sd) = value.standard_deviation {
        out.push_str(&format!(" (sd {sd:.1})"));
    }
    if !value.units.is_empty() {
        out.push(' ');
        out.push_str(&value.units);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_handles_missing_measurement() {
        let value = DemographicValue {
            value: None,
            units: String::new(),
            standard_deviation: None,
        };
        assert_eq!(format_value(&value), "n/a");
    }

    #[test]
    fn format_value_includes_sd_and_units() {
        let value = DemographicValue {
            value: Some(74.21),
            units: "years".to_string(),
            standard_deviation: Some(8.1),
        };
        assert_eq!(format_value(&value), "74.2 (sd 8.1) years");
    }
}
