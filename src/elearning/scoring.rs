use crate::models::course::Lesson;

/// Score a quiz submission against a lesson's question list.
///
/// Answers are selected option indices in question order. A missing or
/// wrong index counts as incorrect. The score is
/// `round(100 * correct / questions)`; a lesson without questions scores 0
/// rather than dividing by zero.
pub fn score_quiz(lesson: &Lesson, answers: &[usize]) -> u8 {
    if lesson.questions.is_empty() {
        return 0;
    }

    let correct = lesson
        .questions
        .iter()
        .enumerate()
        .filter(|(i, question)| answers.get(*i).copied() == Some(question.correct_answer))
        .count();

    ((correct * 100) as f64 / lesson.questions.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::{LessonKind, Question};

    fn question(id: &str, correct_answer: usize) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {id}"),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct_answer,
        }
    }

    fn quiz(questions: Vec<Question>) -> Lesson {
        Lesson {
            id: "L1".to_string(),
            title: "Assessment".to_string(),
            kind: LessonKind::Quiz,
            duration: 15,
            video_url: None,
            document_url: None,
            questions,
        }
    }

    #[test]
    fn test_all_correct_is_100() {
        let lesson = quiz(vec![question("Q1", 1), question("Q2", 3)]);
        assert_eq!(score_quiz(&lesson, &[1, 3]), 100);
    }

    #[test]
    fn test_half_correct_is_50() {
        let lesson = quiz(vec![question("Q1", 1), question("Q2", 3)]);
        assert_eq!(score_quiz(&lesson, &[1, 0]), 50);
    }

    #[test]
    fn test_none_correct_is_0() {
        let lesson = quiz(vec![question("Q1", 1), question("Q2", 3)]);
        assert_eq!(score_quiz(&lesson, &[0, 0]), 0);
    }

    #[test]
    fn test_rounding() {
        let lesson = quiz(vec![question("Q1", 0), question("Q2", 0), question("Q3", 0)]);
        // 1/3 -> 33, 2/3 -> 67
        assert_eq!(score_quiz(&lesson, &[0, 1, 1]), 33);
        assert_eq!(score_quiz(&lesson, &[0, 0, 1]), 67);
    }

    #[test]
    fn test_missing_answers_count_as_wrong() {
        let lesson = quiz(vec![question("Q1", 1), question("Q2", 3)]);
        assert_eq!(score_quiz(&lesson, &[1]), 50);
        assert_eq!(score_quiz(&lesson, &[]), 0);
    }

    #[test]
    fn test_extra_answers_are_ignored() {
        let lesson = quiz(vec![question("Q1", 1)]);
        assert_eq!(score_quiz(&lesson, &[1, 2, 3]), 100);
    }

    #[test]
    fn test_quiz_without_questions_scores_0() {
        let lesson = quiz(Vec::new());
        assert_eq!(score_quiz(&lesson, &[]), 0);
        assert_eq!(score_quiz(&lesson, &[0, 1]), 0);
    }
}
