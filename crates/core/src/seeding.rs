//! Seeds demo tasks so a fresh board conveys value on first launch.

use crate::board::Board;
use crate::draft::DraftField;
use crate::error::BoardError;
use crate::intent::Intent;
use crate::model::TaskStatus;

#[derive(Clone, Copy)]
pub struct SampleSeed {
    pub name: &'static str,
    pub category: &'static str,
    pub responsible: &'static str,
    pub status: TaskStatus,
}

pub const SAMPLE_SEEDS: &[SampleSeed] = &[
    SampleSeed {
        name: "Draft quarterly roadmap",
        category: "Planning",
        responsible: "Mario",
        status: TaskStatus::InProgress,
    },
    SampleSeed {
        name: "Reply to partner email",
        category: "Communication",
        responsible: "Ana",
        status: TaskStatus::Pending,
    },
    SampleSeed {
        name: "Review onboarding flow",
        category: "Product",
        responsible: "Carlos",
        status: TaskStatus::Done,
    },
    SampleSeed {
        name: "Book dentist appointment",
        category: "Personal",
        responsible: "Team",
        status: TaskStatus::Pending,
    },
];

/// Push the sample tasks through the regular create-commit path.
///
/// Seeds whose tags are not registered on this board are typed as pending text,
/// so they register exactly as a user would. Returns how many were created.
pub fn seed_sample_tasks(board: &mut Board) -> Result<usize, BoardError> {
    if !board.tasks().is_empty() || !board.is_dashboard_interactive() {
        return Ok(0);
    }

    let mut created = 0;
    for seed in SAMPLE_SEEDS.iter().rev() {
        let intents = [
            Intent::OpenCreate,
            Intent::SetField(DraftField::Name(seed.name.to_string())),
            Intent::SetField(DraftField::Status(seed.status)),
            Intent::SetField(DraftField::PendingCategory(seed.category.to_string())),
            Intent::SetField(DraftField::PendingResponsible(seed.responsible.to_string())),
            Intent::Commit,
        ];
        for intent in intents {
            board.apply(intent)?;
        }
        created += 1;
    }
    tracing::debug!(created, "seeded sample tasks");
    Ok(created)
}
