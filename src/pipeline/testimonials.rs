use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::MISSING_MARKER;
use crate::schema::{ColumnMap, Row};
use crate::types::{StoryPolicy, Testimonial};

/// Stories in source order, filtered by `policy`.
pub fn extract_testimonials(rows: &[Row], columns: &ColumnMap, policy: StoryPolicy) -> Vec<Testimonial> {
    rows.iter()
        .filter_map(|row| {
            let story = row.text(&columns.story);
            if !accepts(policy, &story) {
                return None;
            }
            Some(Testimonial::new(story, row.text(&columns.identifier)))
        })
        .collect()
}

fn accepts(policy: StoryPolicy, story: &str) -> bool {
    match policy {
        StoryPolicy::FullList => !story.is_empty(),
        StoryPolicy::Highlight => !story.is_empty() && !story.eq_ignore_ascii_case(MISSING_MARKER),
    }
}

/// Uniformly pick one story; `None` when there are none.
pub fn select_random_testimonial<'a, R>(testimonials: &'a [Testimonial], rng: &mut R) -> Option<&'a Testimonial>
where
    R: Rng + ?Sized,
{
    testimonials.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows(stories: &[&str]) -> Vec<Row> {
        stories
            .iter()
            .enumerate()
            .map(|(i, story)| {
                [
                    ("Your story".to_string(), story.to_string()),
                    ("Batch, branch, year (BITS ID says it all)".to_string(), format!("  2015A{}PS  ", i)),
                    ("Email".to_string(), format!("person{}@x.com", i)),
                ]
                .into_iter()
                .collect::<Row>()
            })
            .collect()
    }

    #[test]
    fn empty_and_whitespace_stories_are_dropped_by_both_policies() {
        let rows = rows(&["Kept", "", "   ", "\t\n"]);
        for policy in [StoryPolicy::Highlight, StoryPolicy::FullList] {
            let stories = extract_testimonials(&rows, &ColumnMap::default(), policy);
            assert_eq!(stories, vec![Testimonial::new("Kept", "2015A0PS")]);
        }
    }

    #[test]
    fn exported_missing_marker_is_dropped_by_both_policies() {
        let rows = rows(&["Helped me a lot", "", "nan"]);
        let full = extract_testimonials(&rows, &ColumnMap::default(), StoryPolicy::FullList);
        let highlight = extract_testimonials(&rows, &ColumnMap::default(), StoryPolicy::Highlight);
        assert_eq!(full.len(), 1);
        assert_eq!(highlight.len(), 1);
        assert_eq!(full[0].story, "Helped me a lot");
    }

    #[test]
    fn case_variants_of_nan_only_dropped_by_highlight() {
        let rows = rows(&["NAN", " Nan ", "Real story"]);
        let full = extract_testimonials(&rows, &ColumnMap::default(), StoryPolicy::FullList);
        let highlight = extract_testimonials(&rows, &ColumnMap::default(), StoryPolicy::Highlight);
        assert_eq!(full.len(), 3);
        assert_eq!(highlight, vec![Testimonial::new("Real story", "2015A2PS")]);
    }

    #[test]
    fn missing_identifier_column_reads_empty() {
        let rows: Vec<Row> = vec![[("Your story", "Only a story")].into_iter().collect()];
        let stories = extract_testimonials(&rows, &ColumnMap::default(), StoryPolicy::FullList);
        assert_eq!(stories, vec![Testimonial::new("Only a story", "")]);
    }

    #[test]
    fn source_order_is_kept() {
        let rows = rows(&["first", "second", "third"]);
        let stories = extract_testimonials(&rows, &ColumnMap::default(), StoryPolicy::FullList);
        let order: Vec<&str> = stories.iter().map(|t| t.story.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn random_pick_comes_from_input() {
        let stories = vec![Testimonial::new("a", ""), Testimonial::new("b", ""), Testimonial::new("c", "")];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pick = select_random_testimonial(&stories, &mut rng).unwrap();
            assert!(stories.contains(pick));
        }
    }

    #[test]
    fn random_pick_of_nothing_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_random_testimonial(&[], &mut rng).is_none());
    }
}
