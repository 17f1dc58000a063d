#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration, OffsetDateTime};
    use crate::{
        parse_selection, validate_new_question, Choice, NewQuestion, Question, SelectionError,
        Tally, ValidationError, MAX_QUESTION_TEXT_LENGTH, NO_CHOICE_SELECTED,
    };

    fn choice(id: i64, text: &str, votes: i32) -> Choice {
        Choice { id, question_id: 1, choice_text: text.into(), votes }
    }

    fn question_at(pub_date: OffsetDateTime) -> Question {
        Question { id: 1, question_text: "What's new?".into(), pub_date }
    }

    #[test]
    fn test_was_published_recently() {
        let now = datetime!(2024-05-01 12:00 UTC);

        assert!(question_at(now).was_published_recently_at(now));
        assert!(question_at(now - Duration::hours(23) - Duration::minutes(59)).was_published_recently_at(now));
        assert!(!question_at(now - Duration::days(1) - Duration::seconds(1)).was_published_recently_at(now));
        assert!(!question_at(now + Duration::days(30)).was_published_recently_at(now));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(Some("42")), Ok(42));
        assert_eq!(parse_selection(Some(" 7 ")), Ok(7));
        assert_eq!(parse_selection(None), Err(SelectionError::Missing));
        assert_eq!(parse_selection(Some("")), Err(SelectionError::Missing));
        assert!(matches!(parse_selection(Some("abc")), Err(SelectionError::Malformed(raw)) if raw == "abc"));
    }

    #[test]
    fn test_every_selection_error_shows_same_message() {
        let errors = [
            SelectionError::Missing,
            SelectionError::Malformed("x".into()),
            SelectionError::UnknownChoice { question_id: 1, choice_id: 9 },
        ];
        assert!(errors.iter().all(|e| e.user_message() == NO_CHOICE_SELECTED));
    }

    #[test]
    fn test_tally() {
        let tally = Tally::from_choices(&[choice(1, "Not much", 1), choice(2, "The sky", 3)]);

        assert_eq!(tally.total_votes, 4);
        assert_eq!(tally.entries.len(), 2);
        assert_eq!(tally.entries[0].share, 25.0);
        assert_eq!(tally.entries[1].share, 75.0);
        assert_eq!(tally.entries[1].choice_id, 2);
        assert_eq!(tally.entries[1].votes, 3);
    }

    #[test]
    fn test_tally_without_votes() {
        let tally = Tally::from_choices(&[choice(1, "Not much", 0), choice(2, "The sky", 0)]);
        assert_eq!(tally.total_votes, 0);
        assert!(tally.entries.iter().all(|e| e.share == 0.0));

        assert_eq!(Tally::from_choices(&[]), Tally::default());
    }

    #[test]
    fn test_validate_new_question() {
        let now = OffsetDateTime::now_utc();
        let valid = NewQuestion::new("What's new?", now).with_choice("Not much").with_tallied_choice("The sky", 3);
        assert_eq!(validate_new_question(&valid), Ok(()));

        assert_eq!(
            validate_new_question(&NewQuestion::new("   ", now)),
            Err(ValidationError::EmptyQuestionText)
        );
        assert_eq!(
            validate_new_question(&NewQuestion::new("q".repeat(MAX_QUESTION_TEXT_LENGTH + 1), now)),
            Err(ValidationError::QuestionTextTooLong)
        );
        assert_eq!(
            validate_new_question(&NewQuestion::new("What's new?", now).with_choice("")),
            Err(ValidationError::EmptyChoiceText)
        );
        assert_eq!(
            validate_new_question(&NewQuestion::new("What's new?", now).with_tallied_choice("The sky", -1)),
            Err(ValidationError::NegativeVotes(-1))
        );
    }
}
