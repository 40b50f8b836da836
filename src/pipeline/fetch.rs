use std::collections::HashMap;

use crate::app::ports::TableSource;
use crate::error::Result;
use crate::schema::{Row, Table};

/// Fetch the export at `url` and parse it into rows.
pub async fn fetch_table(source: &dyn TableSource, url: &str) -> Result<Table> {
    let text = source.fetch_csv(url).await?;
    parse_table(&text)
}

/// Parse CSV text with a header record.
///
/// Short records are accepted; their trailing columns read as absent. When a
/// header repeats, the first column with that name wins.
pub fn parse_table(text: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut cells = HashMap::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(record.iter()) {
            cells.entry(header.clone()).or_insert_with(|| value.to_string());
        }
        rows.push(Row::new(cells));
    }

    Ok(Table { headers, rows })
}
