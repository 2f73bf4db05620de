//! Text rendering of a tax assessment.

use timbre_core::format::{format_cop, format_uvt};
use timbre_core::{TaxBreakdown, TransferTaxAssessment};

/// Renders an assessment as a line-item report.
pub fn render(assessment: &TransferTaxAssessment) -> String {
    let mut lines = vec![
        format!(
            "Valor de la operación: {}",
            format_cop(Some(assessment.value_in_cop))
        ),
        format!(
            "Equivalente en UVT: {}",
            format_uvt(Some(assessment.value_in_uvt))
        ),
        format!("Tarifa aplicable: {}", assessment.bracket.description()),
    ];

    match &assessment.breakdown {
        None => {
            lines.push("La operación está exenta del impuesto de timbre.".to_string());
        }
        Some(TaxBreakdown::Low {
            exempt_amount,
            low_bracket_amount,
            low_bracket_tax,
        }) => {
            lines.push(format!("  Tramo exento: {}", format_cop(Some(*exempt_amount))));
            lines.push(format!(
                "  Base gravable al 1,5%: {}",
                format_cop(Some(*low_bracket_amount))
            ));
            lines.push(format!(
                "  Impuesto tramo bajo: {}",
                format_cop(Some(*low_bracket_tax))
            ));
        }
        Some(TaxBreakdown::High {
            exempt_amount,
            low_bracket_amount,
            low_bracket_tax,
            high_bracket_amount,
            high_bracket_tax,
            fixed_amount,
        }) => {
            lines.push(format!("  Tramo exento: {}", format_cop(Some(*exempt_amount))));
            lines.push(format!(
                "  Base gravable al 1,5%: {}",
                format_cop(Some(*low_bracket_amount))
            ));
            lines.push(format!(
                "  Impuesto tramo bajo: {}",
                format_cop(Some(*low_bracket_tax))
            ));
            lines.push(format!(
                "  Base gravable al 3%: {}",
                format_cop(Some(*high_bracket_amount))
            ));
            lines.push(format!(
                "  Impuesto tramo alto: {}",
                format_cop(Some(*high_bracket_tax))
            ));
            lines.push(format!(
                "  Componente fijo (450 UVT): {}",
                format_cop(Some(*fixed_amount))
            ));
        }
    }

    lines.push(format!(
        "Impuesto de timbre total: {}",
        format_cop(Some(assessment.tax_amount))
    ));
    lines.join("\n")
}
