use crate::engine::SoilAssessment;
use crate::ph::{PhBand, OPTIMAL_PH};
use crate::validation::ValidationReport;

/// Markdown formatter for soil assessments
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format assessment as a markdown report
    pub fn format(assessment: &SoilAssessment) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Analysis Results\n\n");

        // Quality + score
        md.push_str(&format!("## Soil Quality: {}\n\n", assessment.quality));
        md.push_str(&format!(
            "**Overall Score:** {}%  \n{}\n\n",
            assessment.overall_score,
            assessment.quality.description()
        ));

        // pH
        md.push_str("## Estimated pH Level\n\n");
        md.push_str(&format!(
            "**{:.1}** ({})  \nOptimal range: {:.1} - {:.1}\n\n",
            assessment.estimated_ph,
            PhBand::from_ph(assessment.estimated_ph).display_text(),
            OPTIMAL_PH.start(),
            OPTIMAL_PH.end()
        ));

        md.push_str("## 📋 Recommendations\n\n");
        for rec in &assessment.recommendations {
            md.push_str(&format!("- {}\n", rec));
        }
        md.push('\n');

        // Fertilizer section only when something is deficient
        if !assessment.fertilizer_plan.is_empty() {
            md.push_str("## 🌾 Fertilizer Recommendations\n\n");
            for (nutrient, dosage) in &assessment.fertilizer_plan {
                md.push_str(&format!("- **{}:** {}\n", nutrient.label(), dosage));
            }
            md.push('\n');
        }

        md.push_str("## 🌱 Suitable Crops\n\n");
        md.push_str(&assessment.suitable_crops.join(", "));
        md.push('\n');

        md
    }

    /// Format validation failures, one line per field
    pub fn format_errors(report: &ValidationReport) -> String {
        let mut md = String::from("# Invalid Soil Parameters\n\n");
        for (field, message) in report.iter() {
            md.push_str(&format!("- **{}:** {}\n", field.label(), message));
        }
        md
    }
}
