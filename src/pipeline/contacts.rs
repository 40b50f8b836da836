use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SiteError};
use crate::schema::{ColumnMap, Table};
use crate::types::Contact;

/// Seniors with a usable email, in source order.
///
/// The email column is required; every other column reads as empty when the
/// sheet does not have it.
pub fn extract_contacts(table: &Table, columns: &ColumnMap) -> Result<Vec<Contact>> {
    if !table.has_column(&columns.email) {
        return Err(SiteError::MissingColumn(columns.email.clone()));
    }

    let contacts = table
        .rows
        .iter()
        .filter_map(|row| {
            let email = row.text(&columns.email);
            if email.is_empty() || !email.contains('@') {
                return None;
            }
            Some(Contact {
                name: row.text(&columns.name),
                batch_info: row.text(&columns.identifier),
                email,
                linkedin: row.text(&columns.linkedin),
                phone: row.text(&columns.phone),
            })
        })
        .collect();

    Ok(contacts)
}

/// Uniform sample without replacement of `min(n, contacts.len())` seniors.
pub fn sample_contacts<R>(contacts: &[Contact], n: usize, rng: &mut R) -> Vec<Contact>
where
    R: Rng + ?Sized,
{
    contacts.choose_multiple(rng, n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fetch::parse_table;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const SHEET: &str = "\
Name,Batch,Email,LinkedIn Profile Link,Your story
Asha,2012,asha@example.com,https://linkedin.com/in/asha,Hi
Bo,2013,,https://linkedin.com/in/bo,Hello
Chen,2014,not-an-email,,Hey
Dev,2015, dev@example.com ,,Yo
Esi,2016,nan,,Sup
";

    fn contacts(n: usize) -> Vec<Contact> {
        (0..n)
            .map(|i| Contact {
                name: format!("Senior {}", i),
                batch_info: String::new(),
                email: format!("senior{}@example.com", i),
                linkedin: String::new(),
                phone: String::new(),
            })
            .collect()
    }

    #[test]
    fn keeps_only_rows_with_plausible_email() {
        let table = parse_table(SHEET).unwrap();
        let found = extract_contacts(&table, &ColumnMap::default()).unwrap();
        let emails: Vec<&str> = found.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["asha@example.com", "dev@example.com"]);
        assert_eq!(found[0].linkedin, "https://linkedin.com/in/asha");
    }

    #[test]
    fn absent_optional_columns_read_empty() {
        // No phone column and the identifier column is named differently
        let table = parse_table(SHEET).unwrap();
        let found = extract_contacts(&table, &ColumnMap::default()).unwrap();
        assert_eq!(found[0].phone, "");
        assert_eq!(found[0].batch_info, "");
        assert_eq!(found[0].name, "Asha");
    }

    #[test]
    fn missing_email_column_is_reported() {
        let table = parse_table("Name,Your story\nAsha,Hi\n").unwrap();
        let err = extract_contacts(&table, &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, SiteError::MissingColumn(ref c) if c == "Email"));
    }

    #[test]
    fn sample_size_is_min_of_n_and_available() {
        let mut rng = StdRng::seed_from_u64(42);
        for available in 0..6 {
            let pool = contacts(available);
            let sample = sample_contacts(&pool, 3, &mut rng);
            assert_eq!(sample.len(), available.min(3));
        }
    }

    #[test]
    fn sample_is_distinct_and_drawn_from_input() {
        let pool = contacts(10);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let sample = sample_contacts(&pool, 3, &mut rng);
            let unique: HashSet<&str> = sample.iter().map(|c| c.email.as_str()).collect();
            assert_eq!(unique.len(), 3);
            assert!(sample.iter().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn empty_pool_samples_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_contacts(&[], 3, &mut rng).is_empty());
    }
}
