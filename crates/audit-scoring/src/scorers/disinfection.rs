use std::sync::LazyLock;

use audit_core::models::audit_type::AuditType;
use audit_core::models::bundle::DisinfectionTask;
use audit_core::models::compliance::{ComplianceDetail, ComplianceResult, DisinfectionDetail};
use audit_core::models::form::AuditFormValues;

use crate::checklist::{round2, Checklist, ChecklistField, CompletionRule, Tally};
use crate::Scorer;

/// Environmental disinfection audit. The raw completion percentage is
/// weighted by how often the task group is due, then capped at 100.
pub struct Disinfection;

fn task_group(task: DisinfectionTask, items: &[(&str, &str)]) -> Checklist {
    let frequency = task.frequency();
    Checklist {
        id: task.label().to_string(),
        name: format!("{} tasks", frequency.as_str()),
        fields: items
            .iter()
            .map(|(id, label)| ChecklistField::new(id, label, CompletionRule::Yes))
            .collect(),
        description: Some(format!(
            "Multiplier {} applied to raw completion",
            frequency.multiplier()
        )),
    }
}

static CHECKLISTS: LazyLock<Vec<Checklist>> = LazyLock::new(|| {
    vec![
        task_group(
            DisinfectionTask::DailyTasks,
            &[
                ("highTouchSurfaces", "High-touch surfaces wiped"),
                ("bedRails", "Bed rails disinfected"),
                ("monitorsAndCables", "Monitors and cables wiped"),
                ("ivPoles", "IV poles and pumps wiped"),
                ("bedsideTables", "Bedside tables disinfected"),
                ("callBells", "Call bells wiped"),
                ("doorHandles", "Door handles disinfected"),
                ("sinksAndTaps", "Sinks and taps cleaned"),
                ("floorsMopped", "Floors mopped"),
                ("wasteBinsCleaned", "Waste bins emptied and cleaned"),
            ],
        ),
        task_group(
            DisinfectionTask::AfterUseTasks,
            &[
                ("equipmentWiped", "Shared equipment wiped after use"),
                ("stethoscopeCleaned", "Stethoscope cleaned"),
                ("bpCuffCleaned", "BP cuff cleaned"),
                ("commodeDisinfected", "Commode disinfected"),
            ],
        ),
        task_group(
            DisinfectionTask::WeeklyTasks,
            &[
                ("curtainsChanged", "Privacy curtains changed"),
                ("ventsCleaned", "Air vents cleaned"),
                ("storageShelvesWiped", "Storage shelves wiped"),
                ("wallsWiped", "Walls spot-cleaned"),
            ],
        ),
    ]
});

impl Scorer for Disinfection {
    fn audit_type(&self) -> AuditType {
        AuditType::Disinfection
    }

    fn checklists(&self) -> &[Checklist] {
        &CHECKLISTS
    }

    fn score(&self, values: &AuditFormValues) -> ComplianceResult {
        score_disinfection(values)
    }
}

pub fn score_disinfection(values: &AuditFormValues) -> ComplianceResult {
    let selector = values.first("taskType");
    let Some(task) = selector.and_then(DisinfectionTask::from_label) else {
        tracing::warn!(task = ?selector, "unrecognized disinfection task type");
        return ComplianceResult::empty();
    };
    let Some(checklist) = CHECKLISTS.iter().find(|c| c.id == task.label()) else {
        return ComplianceResult::empty();
    };

    let frequency = task.frequency();
    let tally = Tally::of(&checklist.fields, values);
    let raw_score = tally.ratio() * 100.0;
    let score = (raw_score * frequency.multiplier()).min(100.0);

    ComplianceResult {
        score: round2(score),
        total_fields: tally.total,
        completed_fields: tally.completed,
        details: ComplianceDetail::Disinfection(DisinfectionDetail {
            task_type: task,
            frequency,
            multiplier: frequency.multiplier(),
            raw_score: round2(raw_score),
            fields: checklist.completion(values),
        }),
    }
}
