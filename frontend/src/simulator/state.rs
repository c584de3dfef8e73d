pub const MIN_AUDIENCE: u32 = 100;
pub const MAX_AUDIENCE: u32 = 5000;
pub const AUDIENCE_STEP: u32 = 100;
pub const DEFAULT_AUDIENCE: u32 = 500;

pub const BASE_MULTIPLIER: u64 = 15;
pub const TIP_MULTIPLIER: u64 = 20;

pub const DEFAULT_CLAIM_LABEL: &str = "CLAIM THIS INCOME";
pub const WARNING_CLAIM_LABEL: &str = "⚠️ ONLY IF YOU TAKE ACTION!";

/// Identifies one testimonial panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimStatus {
    #[default]
    Idle,
    ActionRequired,
}

/// Interactive view state of the earnings estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorState {
    audience_size: u32,
    tip_mode_enabled: bool,
    expanded_panel: Option<PanelId>,
    claim: ClaimStatus,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            audience_size: DEFAULT_AUDIENCE,
            tip_mode_enabled: false,
            expanded_panel: None,
            claim: ClaimStatus::Idle,
        }
    }
}

impl SimulatorState {
    pub fn audience_size(&self) -> u32 {
        self.audience_size
    }

    pub fn tip_mode_enabled(&self) -> bool {
        self.tip_mode_enabled
    }

    pub fn expanded_panel(&self) -> Option<PanelId> {
        self.expanded_panel
    }

    pub fn is_expanded(&self, id: PanelId) -> bool {
        self.expanded_panel == Some(id)
    }

    pub fn claim_active(&self) -> bool {
        self.claim == ClaimStatus::ActionRequired
    }

    pub fn claim_label(&self) -> &'static str {
        match self.claim {
            ClaimStatus::Idle => DEFAULT_CLAIM_LABEL,
            ClaimStatus::ActionRequired => WARNING_CLAIM_LABEL,
        }
    }

    /// Estimated monthly income for the current inputs.
    pub fn displayed_income(&self) -> u64 {
        displayed_income(self.audience_size, self.tip_mode_enabled)
    }

    /// Clamps into the slider range. Values between grid steps are kept as is;
    /// the range input only ever produces multiples of the step.
    pub fn set_audience_size(&mut self, value: u32) {
        self.audience_size = value.clamp(MIN_AUDIENCE, MAX_AUDIENCE);
    }

    pub fn toggle_tip_mode(&mut self) {
        self.tip_mode_enabled = !self.tip_mode_enabled;
    }

    /// Accordion toggle: opening one panel closes any other.
    pub fn toggle_expanded_panel(&mut self, id: PanelId) {
        self.expanded_panel = if self.expanded_panel == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub(crate) fn set_claim(&mut self, claim: ClaimStatus) {
        self.claim = claim;
    }
}

pub fn displayed_income(audience_size: u32, tip_mode_enabled: bool) -> u64 {
    let multiplier = if tip_mode_enabled {
        TIP_MULTIPLIER
    } else {
        BASE_MULTIPLIER
    };
    u64::from(audience_size) * multiplier
}
