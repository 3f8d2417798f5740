//! Tests for the validated prompt loop, driven by scripted input.

#[cfg(test)]
mod tests {
    use crate::error::UtilError;
    use crate::input::*;
    use std::cell::Cell;
    use std::fmt::Display;
    use std::io::Cursor;

    type Scripted = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn scripted(input: &str) -> Scripted {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: &Scripted) -> String {
        String::from_utf8(prompter.output().clone()).unwrap()
    }

    fn in_range(value: &i32, (lo, hi): (i32, i32)) -> bool {
        *value >= lo && *value <= hi
    }

    #[test]
    fn test_prompt_one_renders_args() {
        let mut prompter = scripted("42\n");
        let name = "answer";
        let value: i32 = prompter
            .prompt_one(&PromptSpec::new("The {}: ").with_args(&[&name]))
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(written(&prompter), "The answer: ");
    }

    #[test]
    fn test_bound_accepts_first_try() {
        let mut prompter = scripted("14\n");
        let spec = PromptSpec::new("N: ");
        let value: i32 = prompter
            .prompt_one_validated_bound(&spec, "Out of range.\n", in_range, (10, 16))
            .unwrap();

        assert_eq!(value, 14);
        assert_eq!(written(&prompter), "N: ");
    }

    #[test]
    fn test_bound_rejects_twice_then_accepts() {
        let mut prompter = scripted("5\n20\n12\n");
        let spec = PromptSpec::new("N: ");
        let value: i32 = prompter
            .prompt_one_validated_bound(&spec, "Out of range.\n", in_range, (10, 16))
            .unwrap();

        assert_eq!(value, 12);
        let out = written(&prompter);
        assert_eq!(out.matches("Out of range.\n").count(), 2);
        assert_eq!(out, "N: Out of range.\nN: Out of range.\nN: ");
    }

    #[test]
    fn test_predicate_runs_once_per_candidate() {
        let calls = Cell::new(0);
        let mut prompter = scripted("1 2 3\n");
        let value: u32 = prompter
            .prompt_one_validated(&PromptSpec::new("> "), "no\n", |v: &u32| {
                calls.set(calls.get() + 1);
                *v == 3
            })
            .unwrap();

        assert_eq!(value, 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_bound_is_fresh_on_every_retry() {
        // The predicate drains its bound list, so reusing one copy across
        // retries would leave nothing to compare against.
        let mut prompter = scripted("0 100 7\n");
        let value: i64 = prompter
            .prompt_one_validated_bound(
                &PromptSpec::new("> "),
                "retry\n",
                |v: &i64, bounds: Vec<i64>| {
                    let mut bounds = bounds.into_iter();
                    match (bounds.next(), bounds.next()) {
                        (Some(lo), Some(hi)) => *v > lo && *v < hi,
                        _ => false,
                    }
                },
                vec![1, 10],
            )
            .unwrap();

        assert_eq!(value, 7);
    }

    #[test]
    fn test_scan_mismatch_is_surfaced() {
        let mut prompter = scripted("twelve\n");
        let result: Result<i32, _> =
            prompter.prompt_one_validated(&PromptSpec::new("> "), "no\n", |_| true);

        match result {
            Err(UtilError::ScanMismatch { token, .. }) => assert_eq!(token, "twelve"),
            other => panic!("expected ScanMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_unbounded_loop_stops_only_at_end_of_input() {
        let mut prompter = scripted("1 2 3 4 5\n");
        let result: Result<i32, _> =
            prompter.prompt_one_validated(&PromptSpec::new(""), "x", |_| false);

        assert!(matches!(result, Err(UtilError::EndOfInput)));
        assert_eq!(written(&prompter), "xxxxx");
    }

    #[test]
    fn test_max_attempts_is_opt_in() {
        let mut prompter = scripted("1 2 3 4 5\n").with_policy(RetryPolicy::MaxAttempts(2));
        let result: Result<i32, _> =
            prompter.prompt_one_validated(&PromptSpec::new(""), "x", |_| false);

        match result {
            Err(UtilError::RetriesExhausted { attempts }) => assert_eq!(attempts, 2),
            other => panic!("expected RetriesExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_range_ordinal_before() {
        let mut prompter = scripted("7 8\n");
        let mut cells = [0i32; 4];
        let prompt = RangePrompt::new(PromptSpec::new("Value: "), "#{} ", OrdinalPlacement::Before);

        prompter.prompt_range(&prompt, &mut cells, 1, 2).unwrap();

        assert_eq!(cells, [0, 7, 8, 0]);
        assert_eq!(written(&prompter), "#2 Value: #3 Value: ");
    }

    #[test]
    fn test_range_ordinal_after_with_args() {
        let mut prompter = scripted("1.5\n2.5\n");
        let mut cells = [0.0f64; 2];
        let unit = "cm";
        let args: [&dyn Display; 1] = [&unit];
        let prompt = RangePrompt::new(
            PromptSpec::new("Length in {}").with_args(&args),
            " ({}): ",
            OrdinalPlacement::After,
        );

        prompter.prompt_range(&prompt, &mut cells, 0, 1).unwrap();

        assert_eq!(cells, [1.5, 2.5]);
        assert_eq!(written(&prompter), "Length in cm (1): Length in cm (2): ");
    }

    #[test]
    fn test_range_validated_bound_retries_per_cell() {
        let mut prompter = scripted("1 50 3 99 4\n");
        let mut cells = [0u8; 3];
        let prompt = RangePrompt::new(PromptSpec::new(": "), "{}", OrdinalPlacement::Before);

        prompter
            .prompt_range_validated_bound(
                &prompt,
                &mut cells,
                0,
                2,
                "too big\n",
                |v: &u8, limit: u8| *v < limit,
                10,
            )
            .unwrap();

        assert_eq!(cells, [1, 3, 4]);
        assert_eq!(written(&prompter), "1: 2: too big\n2: 3: too big\n3: ");
    }

    #[test]
    fn test_range_validated_starts_at_start() {
        let mut prompter = scripted("5 6\n");
        let mut cells = [9i32; 4];
        let prompt = RangePrompt::new(PromptSpec::new("> "), "", OrdinalPlacement::After);

        // An ordinal template without a placeholder cannot take the position.
        let result = prompter.prompt_range_validated(&prompt, &mut cells, 2, 3, "", |_| true);
        assert!(matches!(result, Err(UtilError::TemplateArity { .. })));

        let prompt = RangePrompt::new(PromptSpec::new("> "), "[{}]", OrdinalPlacement::After);
        prompter
            .prompt_range_validated(&prompt, &mut cells, 2, 3, "", |v: &i32| *v > 0)
            .unwrap();
        assert_eq!(cells, [9, 9, 5, 6]);
    }

    #[test]
    fn test_range_rejects_invalid_bounds_before_output() {
        let mut prompter = scripted("1\n");
        let mut cells = [0i32; 2];
        let prompt = RangePrompt::new(PromptSpec::new("> "), "{}", OrdinalPlacement::Before);

        let result = prompter.prompt_range(&prompt, &mut cells, 1, 2);
        assert!(matches!(
            result,
            Err(UtilError::InvalidRange { start: 1, end: 2, len: 2 })
        ));
        assert!(written(&prompter).is_empty());
    }

    #[test]
    fn test_range_scan_mismatch_keeps_filled_cells() {
        let mut prompter = scripted("3 x 5\n");
        let mut cells = [0i32; 4];
        let prompt = RangePrompt::new(PromptSpec::new("> "), "{}", OrdinalPlacement::Before);

        match prompter.prompt_range(&prompt, &mut cells, 0, 3) {
            Err(UtilError::ScanMismatch { token, .. }) => assert_eq!(token, "x"),
            other => panic!("expected ScanMismatch, got {:?}", other),
        }
        assert_eq!(cells, [3, 0, 0, 0]);
        assert_eq!(written(&prompter), "1> 2> ");
    }

    #[test]
    fn test_range_validated_scan_mismatch_after_rejection() {
        let mut prompter = scripted("7 -1 oops 8\n");
        let mut cells = [0i32; 3];
        let prompt = RangePrompt::new(PromptSpec::new("> "), "{}", OrdinalPlacement::Before);

        let result =
            prompter.prompt_range_validated(&prompt, &mut cells, 0, 2, "no\n", |v: &i32| *v > 0);

        assert!(matches!(result, Err(UtilError::ScanMismatch { .. })));
        assert_eq!(cells, [7, 0, 0]);
        assert_eq!(written(&prompter), "1> 2> no\n2> ");
    }

    #[test]
    fn test_line_mode_reads_whole_line() {
        let mut prompter = scripted("first second\nJohn Smith\n");
        let spec = PromptSpec::new("Name: ").with_mode(ScanMode::Line);

        let word: String = prompter.prompt_one(&PromptSpec::new("")).unwrap();
        let name: String = prompter.prompt_one(&spec).unwrap();

        assert_eq!(word, "first");
        assert_eq!(name, "John Smith");
    }
}
