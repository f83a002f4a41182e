use anyhow::{bail, Context, Result};
use mooclens::{analytics, RecordStore};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: mooclens <dataset.csv> <query> [args]

queries:
  participation
  participation-by-subject
  instructors
  top <hours|participants> <k>
  search <subject-substr> <min-percent-audited> <max-total-hours>
  recommend <age> <gender 0|1> <degree 0|1>";

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        other => bail!("{} must be 0 or 1, got `{}`", name, other),
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dataset, query, rest) = match args.as_slice() {
        [dataset, query, rest @ ..] => (dataset, query.as_str(), rest),
        _ => bail!("{USAGE}"),
    };

    let store = RecordStore::load(dataset)?;

    let result = match (query, rest) {
        ("participation", []) => json!(analytics::participants_by_institution(&store)),
        ("participation-by-subject", []) => {
            json!(analytics::participants_by_institution_and_subject(&store))
        }
        ("instructors", []) => json!(analytics::courses_by_instructor(&store)),
        ("top", [metric, k]) => {
            let k: usize = k.parse().with_context(|| format!("bad k `{k}`"))?;
            json!(analytics::top_courses(&store, metric, k)?)
        }
        ("search", [subject, min_audited, max_hours]) => {
            let min_audited: f64 = min_audited
                .parse()
                .with_context(|| format!("bad min-percent-audited `{min_audited}`"))?;
            let max_hours: f64 = max_hours
                .parse()
                .with_context(|| format!("bad max-total-hours `{max_hours}`"))?;
            json!(analytics::search_courses(&store, subject, min_audited, max_hours))
        }
        ("recommend", [age, gender, degree]) => {
            let age: f64 = age.parse().with_context(|| format!("bad age `{age}`"))?;
            let male = parse_flag("gender", gender)?;
            let degree = parse_flag("degree", degree)?;
            json!(analytics::recommend_courses(&store, age, male, degree))
        }
        _ => bail!("unknown query `{query}` or wrong arguments\n\n{USAGE}"),
    };

    info!(query, "query complete");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
