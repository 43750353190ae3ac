//! Rule-based sentence boundary detection.

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "a.m", "p.m",
    "inc", "ltd", "co", "corp", "fig", "approx", "dept", "est", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

/// Splits `text` into trimmed sentences, in source order.
///
/// A boundary follows a run of terminators (plus any closing quotes or
/// brackets) when whitespace or the end of text comes next. An ellipsis
/// followed by a lower-case word continues the sentence, and a lone period
/// after a known abbreviation or a single-letter initial is not a boundary. Text without a
/// terminator is a single sentence; whitespace-only text has none.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(b, _)| b);

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && is_terminator(chars[j].1) {
            j += 1;
        }
        while j < chars.len() && is_closer(chars[j].1) {
            j += 1;
        }

        let single_period = j == i + 1 && chars[i].1 == '.';
        if is_boundary(&chars, i, j) && !(single_period && ends_with_abbreviation(text, &chars, i)) {
            let end = byte_at(j);
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// `run` is the first terminator of the run, `next` the index just past it.
fn is_boundary(chars: &[(usize, char)], run: usize, next: usize) -> bool {
    match chars.get(next) {
        None => true,
        Some(&(_, c)) if !c.is_whitespace() => false,
        Some(_) => {
            let following = chars[next..].iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
            match following {
                Some(c) if c.is_lowercase() => !is_ellipsis(&chars[run..next]),
                _ => true,
            }
        }
    }
}

fn is_ellipsis(run: &[(usize, char)]) -> bool {
    run.iter().any(|&(_, c)| c == '…') || run.iter().filter(|&&(_, c)| c == '.').count() > 1
}

/// True when the word ending right before `period` is an abbreviation or an initial.
fn ends_with_abbreviation(text: &str, chars: &[(usize, char)], period: usize) -> bool {
    let mut first = period;
    while first > 0 {
        let c = chars[first - 1].1;
        if c.is_alphanumeric() || c == '.' {
            first -= 1;
        } else {
            break;
        }
    }
    if first == period {
        return false;
    }

    let word = &text[chars[first].0..chars[period].0];
    let mut letters = word.chars();
    if let (Some(c), None) = (letters.next(), letters.next()) {
        return c.is_uppercase();
    }
    let lowered = word.to_lowercase();
    ABBREVIATIONS.contains(&lowered.trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminators() {
        assert_eq!(
            split_sentences("I love this! I hate that."),
            vec!["I love this!", "I hate that."]
        );
        assert_eq!(
            split_sentences("Is it? Yes. 42 is the answer"),
            vec!["Is it?", "Yes.", "42 is the answer"]
        );
    }

    #[test]
    fn empty_and_blank_have_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(split_sentences("  no full stop here "), vec!["no full stop here"]);
    }

    #[test]
    fn abbreviations_and_initials_do_not_split() {
        assert_eq!(
            split_sentences("Mr. Smith met Dr. Jones. They talked."),
            vec!["Mr. Smith met Dr. Jones.", "They talked."]
        );
        assert_eq!(
            split_sentences("J. R. R. Tolkien wrote it. Read it."),
            vec!["J. R. R. Tolkien wrote it.", "Read it."]
        );
        assert_eq!(
            split_sentences("Bring fruit, e.g. Apples. Thanks."),
            vec!["Bring fruit, e.g. Apples.", "Thanks."]
        );
    }

    #[test]
    fn lowercase_sentences_split() {
        assert_eq!(
            split_sentences("i love this. i hate that."),
            vec!["i love this.", "i hate that."]
        );
        assert_eq!(
            split_sentences("great food! slow service? meh"),
            vec!["great food!", "slow service?", "meh"]
        );
    }

    #[test]
    fn decimals_and_trailing_ellipses_do_not_split() {
        assert_eq!(
            split_sentences("It costs 3.5 dollars. well... maybe not. Really?"),
            vec!["It costs 3.5 dollars.", "well... maybe not.", "Really?"]
        );
        assert_eq!(split_sentences("so… anyway"), vec!["so… anyway"]);
        assert_eq!(
            split_sentences("Bring fruit, e.g. apples. thanks."),
            vec!["Bring fruit, e.g. apples.", "thanks."]
        );
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        assert_eq!(
            split_sentences("She said \"Stop!\" Then she left."),
            vec!["She said \"Stop!\"", "Then she left."]
        );
    }

    #[test]
    fn repeated_terminators_form_one_boundary() {
        assert_eq!(split_sentences("What?! No way!!!"), vec!["What?!", "No way!!!"]);
    }
}
