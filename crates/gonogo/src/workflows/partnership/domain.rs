use serde::{Deserialize, Serialize};

/// Apartment standard tier declared for the development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApartmentStandard {
    Low,
    #[default]
    Medium,
    High,
}

impl ApartmentStandard {
    pub fn label(&self) -> &'static str {
        match self {
            ApartmentStandard::Low => "Baixo padrão",
            ApartmentStandard::Medium => "Médio padrão",
            ApartmentStandard::High => "Alto padrão",
        }
    }
}

/// Commercial phase of the development at the time of analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPhase {
    #[default]
    PreLaunch,
    Launch,
    Construction,
    PostConstruction,
}

impl ProjectPhase {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectPhase::PreLaunch => "Pré-lançamento",
            ProjectPhase::Launch => "Lançamento",
            ProjectPhase::Construction => "Obra",
            ProjectPhase::PostConstruction => "Pós-obra",
        }
    }
}

/// Typology tag describing the development as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTypology {
    #[default]
    Residential,
    Mixed,
    HighEnd,
    Economic,
}

impl ProjectTypology {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectTypology::Residential => "Residencial",
            ProjectTypology::Mixed => "Misto",
            ProjectTypology::HighEnd => "Alto Padrão",
            ProjectTypology::Economic => "Econômico",
        }
    }
}

/// Identification and headline figures of the development under analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInputs {
    pub name: String,
    pub developer: String,
    pub city: String,
    pub state: String,
    pub store_name: String,
    pub units: u32,
    pub vgv: f64,
    pub months_to_key: u32,
    pub apartment_standard: ApartmentStandard,
    pub phase: ProjectPhase,
    pub typology: ProjectTypology,
}

/// One row of the development's typology mix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Typology {
    pub id: String,
    pub label: String,
    pub floor_area_m2: f64,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Scope of a reform package offered for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    #[default]
    Complete,
    Partial,
    Single,
}

/// Average package value and expected adhesion for one reform slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReformPackage {
    pub package_type: PackageType,
    pub value: f64,
    /// Expected share of units buying the package, 0-100.
    pub adhesion: f64,
}

impl ReformPackage {
    pub fn new(value: f64, adhesion: f64) -> Self {
        Self {
            package_type: PackageType::Complete,
            value,
            adhesion,
        }
    }
}

/// The four fixed reform package slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReformSlot {
    Bathroom,
    Kitchen,
    LivingRoom,
    Bedroom,
}

impl ReformSlot {
    pub fn label(&self) -> &'static str {
        match self {
            ReformSlot::Bathroom => "Banheiro",
            ReformSlot::Kitchen => "Cozinha",
            ReformSlot::LivingRoom => "Sala",
            ReformSlot::Bedroom => "Quarto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReformPackageSet {
    pub bathroom: ReformPackage,
    pub kitchen: ReformPackage,
    pub living_room: ReformPackage,
    pub bedroom: ReformPackage,
}

impl ReformPackageSet {
    pub fn slots(&self) -> [(ReformSlot, &ReformPackage); 4] {
        [
            (ReformSlot::Bathroom, &self.bathroom),
            (ReformSlot::Kitchen, &self.kitchen),
            (ReformSlot::LivingRoom, &self.living_room),
            (ReformSlot::Bedroom, &self.bedroom),
        ]
    }

    /// Sum of adhesion percentages. Values above 100 only raise a warning.
    pub fn total_adhesion(&self) -> f64 {
        self.slots()
            .iter()
            .map(|(_, package)| sanitize(package.adhesion))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    #[default]
    Percentage,
    Fixed,
}

/// Commission terms agreed with the developer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialModel {
    pub commission_type: CommissionType,
    /// Percentage of gross reform revenue, or currency per unit when fixed.
    pub commission_value: f64,
    pub incentives: String,
    pub counterparty_obligations: String,
}

/// Execution capacity and supply chain ratings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalData {
    /// Only consulted when neither the typology mix nor the project carry a unit count.
    pub total_units: u32,
    pub rooms_per_unit: f64,
    pub work_duration_months: f64,
    pub monthly_capacity_available: f64,
    /// Units one engineer supervises per month.
    pub engineer_capacity: f64,
    pub technical_complexity: f64,
    pub supply_dependency: f64,
    pub logistical_risk: f64,
    pub standardization: f64,
    pub peak_months: f64,
    /// Non-positive values mean "unset" and resolve to [`DEFAULT_PEAK_MULTIPLIER`].
    pub peak_multiplier: f64,
    /// Units the engineering squads deliver per month, used for the delivery schedule.
    pub monthly_unit_capacity: f64,
}

pub const DEFAULT_PEAK_MULTIPLIER: f64 = 1.5;

impl OperationalData {
    pub fn effective_peak_multiplier(&self) -> f64 {
        if self.peak_multiplier.is_finite() && self.peak_multiplier > 0.0 {
            self.peak_multiplier
        } else {
            DEFAULT_PEAK_MULTIPLIER
        }
    }
}

/// Raw financial metrics, not normalised.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialMetrics {
    /// Margin in percent.
    pub margin: f64,
    pub ticket: f64,
    pub ltv: f64,
    pub payback_months: f64,
    pub cac: f64,
}

/// Risk ratings on a 0-10 scale where higher is worse.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRatings {
    pub legal: f64,
    pub default: f64,
    pub reputational: f64,
    pub operational: f64,
    /// Share of the margin exposed to litigation, 0-100.
    pub litigation_percentage: f64,
}

impl RiskRatings {
    pub fn ratings(&self) -> [f64; 4] {
        [self.legal, self.default, self.reputational, self.operational]
    }
}

/// Strategy ratings on a 0-10 scale where higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyRatings {
    pub adherence: f64,
    pub synergy: f64,
    pub recurrence: f64,
    pub cross_sell: f64,
}

/// Rating groups filled in by the analyst. A missing group is tolerated everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scores {
    pub financial: Option<FinancialMetrics>,
    pub risk: Option<RiskRatings>,
    pub strategy: Option<StrategyRatings>,
}

impl Scores {
    pub fn financial(&self) -> FinancialMetrics {
        self.financial.unwrap_or_default()
    }

    pub fn risk(&self) -> RiskRatings {
        self.risk.unwrap_or_default()
    }

    pub fn strategy(&self) -> StrategyRatings {
        self.strategy.unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.financial.is_some() && self.risk.is_some() && self.strategy.is_some()
    }
}

/// Communication package sold to the developer alongside the reform offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationTier {
    #[default]
    None,
    Basic,
    Standard,
    Premium,
}

impl CommunicationTier {
    pub fn value(&self) -> f64 {
        match self {
            CommunicationTier::None => 0.0,
            CommunicationTier::Basic => 20_000.0,
            CommunicationTier::Standard => 45_000.0,
            CommunicationTier::Premium => 85_000.0,
        }
    }

    /// Fixed sub-score contribution; no package is neutral.
    pub fn score(&self) -> f64 {
        match self {
            CommunicationTier::None => 5.0,
            CommunicationTier::Basic => 6.0,
            CommunicationTier::Standard => 8.0,
            CommunicationTier::Premium => 10.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommunicationTier::None => "Nenhum",
            CommunicationTier::Basic => "Basic",
            CommunicationTier::Standard => "Standard",
            CommunicationTier::Premium => "Premium",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommunicationTier::None => "Sem pacote de comunicação",
            CommunicationTier::Basic => "Comunicação essencial",
            CommunicationTier::Standard => "Comunicação completa",
            CommunicationTier::Premium => "Solução 360º",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            CommunicationTier::None => &[],
            CommunicationTier::Basic => &[
                "Material de ponto de venda",
                "Folhetos informativos",
                "Sinalização básica",
                "Suporte por email",
            ],
            CommunicationTier::Standard => &[
                "Tudo do Basic",
                "Stand customizado",
                "Material digital",
                "Campanha de email marketing",
                "Gerente de conta dedicado",
            ],
            CommunicationTier::Premium => &[
                "Tudo do Standard",
                "Evento de lançamento",
                "Campanha em redes sociais",
                "Vídeo institucional",
                "App personalizado",
                "Assessoria estratégica",
            ],
        }
    }
}

/// Simple installation services priced per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationKind {
    #[default]
    SplitAirConditioner,
    CeilingFan,
    Wallpaper,
    DigitalLock,
    Cooktop,
    Oven,
    RangeHood,
    Shower,
    LightFixture,
}

impl InstallationKind {
    pub fn label(&self) -> &'static str {
        match self {
            InstallationKind::SplitAirConditioner => "Ar-condicionado (split)",
            InstallationKind::CeilingFan => "Ventilador de teto",
            InstallationKind::Wallpaper => "Papel de parede",
            InstallationKind::DigitalLock => "Fechadura digital",
            InstallationKind::Cooktop => "Cooktop",
            InstallationKind::Oven => "Forno",
            InstallationKind::RangeHood => "Coifa",
            InstallationKind::Shower => "Chuveiro",
            InstallationKind::LightFixture => "Lustre / luminária",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleInstallation {
    pub id: String,
    pub kind: InstallationKind,
    pub quantity: u32,
    pub unit_price: f64,
    /// Amount passed through to the service provider per item.
    pub provider_pass_through: f64,
}

/// Complete form state for one analysis session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnershipInputs {
    pub project: ProjectInputs,
    pub typologies: Vec<Typology>,
    pub reform_packages: ReformPackageSet,
    pub commercial: CommercialModel,
    pub operational: OperationalData,
    pub scores: Scores,
    pub communication: CommunicationTier,
    pub installations: Vec<SimpleInstallation>,
}

impl PartnershipInputs {
    /// Unit count shared by every downstream computation.
    pub fn total_units(&self) -> u32 {
        if !self.typologies.is_empty() {
            return self
                .typologies
                .iter()
                .fold(0u32, |total, row| total.saturating_add(row.quantity));
        }
        if self.project.units > 0 {
            return self.project.units;
        }
        self.operational.total_units
    }

    /// Values loaded when a new analysis session starts.
    pub fn seed() -> Self {
        Self {
            project: ProjectInputs {
                name: String::new(),
                developer: String::new(),
                city: String::new(),
                state: String::new(),
                store_name: String::new(),
                units: 100,
                vgv: 0.0,
                months_to_key: 12,
                apartment_standard: ApartmentStandard::Medium,
                phase: ProjectPhase::PreLaunch,
                typology: ProjectTypology::Residential,
            },
            typologies: Vec::new(),
            reform_packages: ReformPackageSet {
                bathroom: ReformPackage::new(18_000.0, 35.0),
                kitchen: ReformPackage::new(32_000.0, 25.0),
                living_room: ReformPackage::new(15_000.0, 30.0),
                bedroom: ReformPackage::new(14_000.0, 40.0),
            },
            commercial: CommercialModel {
                commission_type: CommissionType::Percentage,
                commission_value: 10.0,
                incentives: String::new(),
                counterparty_obligations: String::new(),
            },
            operational: OperationalData {
                total_units: 100,
                rooms_per_unit: 3.0,
                work_duration_months: 12.0,
                monthly_capacity_available: 40.0,
                engineer_capacity: 5.0,
                technical_complexity: 5.0,
                supply_dependency: 5.0,
                logistical_risk: 5.0,
                standardization: 5.0,
                peak_months: 3.0,
                peak_multiplier: DEFAULT_PEAK_MULTIPLIER,
                monthly_unit_capacity: 0.0,
            },
            scores: Scores {
                financial: Some(FinancialMetrics {
                    margin: 8.0,
                    ticket: 15_000.0,
                    ltv: 12_000.0,
                    payback_months: 12.0,
                    cac: 1_500.0,
                }),
                risk: Some(RiskRatings {
                    legal: 3.0,
                    default: 3.0,
                    reputational: 3.0,
                    operational: 3.0,
                    litigation_percentage: 0.0,
                }),
                strategy: Some(StrategyRatings {
                    adherence: 7.0,
                    synergy: 7.0,
                    recurrence: 6.0,
                    cross_sell: 6.0,
                }),
            },
            communication: CommunicationTier::None,
            installations: Vec::new(),
        }
    }
}

/// Replaces NaN and infinities with zero so partially-filled forms never poison a sum.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
