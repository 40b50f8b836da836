#![allow(dead_code)]

use senior_connect::config::SiteConfig;
use senior_connect::infra::StaticTableSource;
use senior_connect::pipeline::DatasetPipeline;
use std::sync::Arc;

pub const SHEET: &str = "\
Timestamp,Name,\"Batch, branch, year (BITS ID says it all)\",Email,LinkedIn Profile Link,Your story
1,Asha,2012A7PS,asha@example.com,https://linkedin.com/in/asha,Helped me a lot
2,Bo,2013B4,bo@example.com,,
3,Chen,2014A3,chen@example.com,,nan
4,Dev,2015A1,dev@example.com,,NAN
5,Esi,2016A8,esi@example.com,,Talking to a senior changed my first year
6,Farah,2017A2,not-an-email,,
7,Gopal,2018A4,gopal@example.com,,
";

pub fn pipeline_for(source: StaticTableSource) -> DatasetPipeline {
    DatasetPipeline::new(Arc::new(source), &SiteConfig::default())
}

pub fn sheet_pipeline() -> DatasetPipeline {
    pipeline_for(StaticTableSource::csv(SHEET))
}
