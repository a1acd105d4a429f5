use crate::error::SubmitError;
use crate::types::{AnswerInput, SubmitInput, Submission};

/// Normalize either submission shape to the batch form and reject payloads
/// with blank identifiers before anything touches the log.
pub fn validate_submit(input: SubmitInput) -> Result<Submission, SubmitError> {
    let (area, checklist_id, answers) = match input {
        SubmitInput::Batch {
            area,
            checklist_id,
            answers,
        } => (area, checklist_id, answers),
        SubmitInput::Single {
            area,
            checklist_id,
            question,
            answer,
        } => (
            area,
            checklist_id,
            vec![AnswerInput {
                question_id: question.id,
                question_text: question.text,
                answer,
            }],
        ),
    };

    if area.trim().is_empty() {
        return Err(SubmitError::InvalidPayload {
            message: "area must not be empty".to_string(),
        });
    }
    if checklist_id.trim().is_empty() {
        return Err(SubmitError::InvalidPayload {
            message: "checklistId must not be empty".to_string(),
        });
    }
    for answer in &answers {
        if answer.question_id.trim().is_empty() {
            return Err(SubmitError::InvalidPayload {
                message: "questionId must not be empty".to_string(),
            });
        }
    }

    Ok(Submission {
        area,
        checklist_id,
        answers,
    })
}
