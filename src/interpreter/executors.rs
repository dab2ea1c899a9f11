mod instruction;

pub use instruction::StepOutcome;
