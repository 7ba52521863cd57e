//! Selectors that pick which checklist a submission is scored against.
//!
//! Each selector parses from the exact option string the form submits and
//! serializes back to it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// CLABSI (central line-associated bloodstream infection) bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClabsiBundle {
    #[serde(rename = "Insertion Bundle")]
    Insertion,
    #[serde(rename = "Maintenance Bundle")]
    Maintenance,
    #[serde(rename = "Removal Bundle")]
    Removal,
}

impl ClabsiBundle {
    pub const ALL: [ClabsiBundle; 3] = [
        ClabsiBundle::Insertion,
        ClabsiBundle::Maintenance,
        ClabsiBundle::Removal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClabsiBundle::Insertion => "Insertion Bundle",
            ClabsiBundle::Maintenance => "Maintenance Bundle",
            ClabsiBundle::Removal => "Removal Bundle",
        }
    }

    /// Checklist id in the scoring tables.
    pub fn key(&self) -> &'static str {
        match self {
            ClabsiBundle::Insertion => "insertion",
            ClabsiBundle::Maintenance => "maintenance",
            ClabsiBundle::Removal => "removal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// VAP (ventilator-associated pneumonia) bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VapBundle {
    #[serde(rename = "Intubation Bundle")]
    Intubation,
    #[serde(rename = "Maintenance Bundle")]
    Maintenance,
    #[serde(rename = "ET Suction Bundle")]
    EtSuction,
    #[serde(rename = "Extubation Bundle")]
    Extubation,
    #[serde(rename = "Post-Extubation Care Bundle")]
    PostExtubation,
}

impl VapBundle {
    pub const ALL: [VapBundle; 5] = [
        VapBundle::Intubation,
        VapBundle::Maintenance,
        VapBundle::EtSuction,
        VapBundle::Extubation,
        VapBundle::PostExtubation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VapBundle::Intubation => "Intubation Bundle",
            VapBundle::Maintenance => "Maintenance Bundle",
            VapBundle::EtSuction => "ET Suction Bundle",
            VapBundle::Extubation => "Extubation Bundle",
            VapBundle::PostExtubation => "Post-Extubation Care Bundle",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VapBundle::Intubation => "intubation",
            VapBundle::Maintenance => "maintenance",
            VapBundle::EtSuction => "et_suction",
            VapBundle::Extubation => "extubation",
            VapBundle::PostExtubation => "post_extubation",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// Non-invasive respiratory support mode for an NIV audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum RespiratorySupport {
    Cpap,
    Nippv,
    Hfnc,
}

impl RespiratorySupport {
    pub const ALL: [RespiratorySupport; 3] = [
        RespiratorySupport::Cpap,
        RespiratorySupport::Nippv,
        RespiratorySupport::Hfnc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RespiratorySupport::Cpap => "CPAP",
            RespiratorySupport::Nippv => "NIPPV",
            RespiratorySupport::Hfnc => "HFNC",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RespiratorySupport::Cpap => "cpap",
            RespiratorySupport::Nippv => "nippv",
            RespiratorySupport::Hfnc => "hfnc",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Group of environmental disinfection tasks audited together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DisinfectionTask {
    DailyTasks,
    AfterUseTasks,
    WeeklyTasks,
}

impl DisinfectionTask {
    pub const ALL: [DisinfectionTask; 3] = [
        DisinfectionTask::DailyTasks,
        DisinfectionTask::AfterUseTasks,
        DisinfectionTask::WeeklyTasks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisinfectionTask::DailyTasks => "dailyTasks",
            DisinfectionTask::AfterUseTasks => "afterUseTasks",
            DisinfectionTask::WeeklyTasks => "weeklyTasks",
        }
    }

    pub fn frequency(&self) -> Frequency {
        match self {
            DisinfectionTask::DailyTasks => Frequency::Daily,
            DisinfectionTask::AfterUseTasks => Frequency::AfterUse,
            DisinfectionTask::WeeklyTasks => Frequency::Weekly,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// How often a disinfection task group is expected to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Daily,
    AfterUse,
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::AfterUse => "after_use",
            Frequency::Weekly => "weekly",
        }
    }

    /// Weight applied to the raw disinfection score before clamping.
    pub fn multiplier(&self) -> f64 {
        match self {
            Frequency::Daily => 1.0,
            Frequency::AfterUse => 1.2,
            Frequency::Weekly => 0.9,
        }
    }
}
