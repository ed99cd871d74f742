use serde::{Deserialize, Serialize};

use super::super::domain::{sanitize, InstallationKind, SimpleInstallation, Typology};
use super::super::revenue::per_unit;

/// Reform spend the retailer expects to capture per square metre of floor area.
pub const CAPTURE_PER_M2: f64 = 1_200.0;

const SUSTAINABLE_MARGIN_PCT: f64 = 25.0;
const ATTENTION_MARGIN_PCT: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypologyLine {
    pub id: String,
    pub label: String,
    pub quantity: u32,
    pub vgv: f64,
    pub capture_per_unit: f64,
    pub capture_total: f64,
}

/// Sales value and reform capture potential of the typology mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypologySummary {
    pub lines: Vec<TypologyLine>,
    pub total_units: u32,
    pub total_vgv: f64,
    pub total_capture: f64,
    pub capture_per_unit: f64,
    /// Capture potential as a percentage of VGV; zero without VGV.
    pub capture_share_of_vgv_pct: f64,
}

impl TypologySummary {
    pub fn from_typologies(typologies: &[Typology]) -> Self {
        let lines: Vec<TypologyLine> = typologies
            .iter()
            .map(|row| {
                let quantity = f64::from(row.quantity);
                let capture_per_unit = sanitize(row.floor_area_m2) * CAPTURE_PER_M2;
                TypologyLine {
                    id: row.id.clone(),
                    label: row.label.clone(),
                    quantity: row.quantity,
                    vgv: sanitize(row.unit_price) * quantity,
                    capture_per_unit,
                    capture_total: capture_per_unit * quantity,
                }
            })
            .collect();

        let total_units = lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity));
        let total_vgv: f64 = lines.iter().map(|line| line.vgv).sum();
        let total_capture: f64 = lines.iter().map(|line| line.capture_total).sum();
        let capture_share_of_vgv_pct = if total_vgv > 0.0 {
            total_capture / total_vgv * 100.0
        } else {
            0.0
        };

        Self {
            lines,
            total_units,
            total_vgv,
            total_capture,
            capture_per_unit: per_unit(total_capture, total_units),
            capture_share_of_vgv_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginHealth {
    Sustainable,
    Attention,
    ReviewRequired,
}

impl MarginHealth {
    pub fn from_margin_pct(margin_pct: f64) -> Self {
        if margin_pct >= SUSTAINABLE_MARGIN_PCT {
            MarginHealth::Sustainable
        } else if margin_pct >= ATTENTION_MARGIN_PCT {
            MarginHealth::Attention
        } else {
            MarginHealth::ReviewRequired
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MarginHealth::Sustainable => "Instalações simples com margem sustentável",
            MarginHealth::Attention => "Margem em atenção - monitorar repasses",
            MarginHealth::ReviewRequired => "Modelo de repasse exige revisão",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationLine {
    pub id: String,
    pub kind: InstallationKind,
    pub quantity: u32,
    pub gross_revenue: f64,
    pub pass_through_cost: f64,
    pub margin: f64,
    pub margin_pct: f64,
}

/// Gross revenue, provider pass-through and retained margin of simple installations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationSummary {
    pub lines: Vec<InstallationLine>,
    pub total_items: u32,
    pub gross_revenue: f64,
    pub margin: f64,
    pub average_margin_pct: f64,
    pub health: MarginHealth,
}

impl InstallationSummary {
    pub fn from_installations(installations: &[SimpleInstallation]) -> Self {
        let lines: Vec<InstallationLine> = installations
            .iter()
            .map(|item| {
                let quantity = f64::from(item.quantity);
                let gross_revenue = sanitize(item.unit_price) * quantity;
                let pass_through_cost = sanitize(item.provider_pass_through) * quantity;
                let margin = gross_revenue - pass_through_cost;
                InstallationLine {
                    id: item.id.clone(),
                    kind: item.kind,
                    quantity: item.quantity,
                    gross_revenue,
                    pass_through_cost,
                    margin,
                    margin_pct: margin_pct(margin, gross_revenue),
                }
            })
            .collect();

        let total_items = lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity));
        let gross_revenue: f64 = lines.iter().map(|line| line.gross_revenue).sum();
        let margin: f64 = lines.iter().map(|line| line.margin).sum();
        let average_margin_pct = margin_pct(margin, gross_revenue);

        Self {
            lines,
            total_items,
            gross_revenue,
            margin,
            average_margin_pct,
            health: MarginHealth::from_margin_pct(average_margin_pct),
        }
    }
}

fn margin_pct(margin: f64, gross_revenue: f64) -> f64 {
    if gross_revenue > 0.0 {
        margin / gross_revenue * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typology_summary_totals_capture_and_vgv() {
        let typologies = vec![
            Typology {
                id: "a".into(),
                label: "2 dormitórios".into(),
                floor_area_m2: 50.0,
                quantity: 60,
                unit_price: 400_000.0,
            },
            Typology {
                id: "b".into(),
                label: "3 dormitórios".into(),
                floor_area_m2: 75.0,
                quantity: 40,
                unit_price: 600_000.0,
            },
        ];

        let summary = TypologySummary::from_typologies(&typologies);

        assert_eq!(summary.total_units, 100);
        assert_eq!(summary.total_vgv, 48_000_000.0);
        assert_eq!(summary.lines[0].capture_per_unit, 60_000.0);
        assert_eq!(summary.total_capture, 7_200_000.0);
        assert_eq!(summary.capture_per_unit, 72_000.0);
        assert!((summary.capture_share_of_vgv_pct - 15.0).abs() < 1e-9);
    }

    #[test]
    fn empty_mix_reports_zeroes() {
        let summary = TypologySummary::from_typologies(&[]);
        assert_eq!(summary.total_units, 0);
        assert_eq!(summary.capture_per_unit, 0.0);
        assert_eq!(summary.capture_share_of_vgv_pct, 0.0);
    }

    #[test]
    fn installation_margin_drives_health() {
        let installations = vec![
            SimpleInstallation {
                id: "split".into(),
                kind: InstallationKind::SplitAirConditioner,
                quantity: 10,
                unit_price: 800.0,
                provider_pass_through: 560.0,
            },
            SimpleInstallation {
                id: "lock".into(),
                kind: InstallationKind::DigitalLock,
                quantity: 10,
                unit_price: 200.0,
                provider_pass_through: 190.0,
            },
        ];

        let summary = InstallationSummary::from_installations(&installations);

        assert_eq!(summary.total_items, 20);
        assert_eq!(summary.gross_revenue, 10_000.0);
        assert_eq!(summary.margin, 2_500.0);
        assert_eq!(summary.average_margin_pct, 25.0);
        assert_eq!(summary.health, MarginHealth::Sustainable);
        assert_eq!(summary.lines[1].margin_pct, 5.0);
    }

    #[test]
    fn health_thresholds() {
        assert_eq!(MarginHealth::from_margin_pct(15.0), MarginHealth::Attention);
        assert_eq!(MarginHealth::from_margin_pct(14.9), MarginHealth::ReviewRequired);
        assert_eq!(
            InstallationSummary::from_installations(&[]).health,
            MarginHealth::ReviewRequired
        );
    }
}
