use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use triangles::tri::rand::{draw_sides, ReplayToken, SideCfg};
use triangles::tri::{classify_with, TriCfg, Triangle, TriangleType};

mod provenance;

#[derive(Parser)]
#[command(name = "triangles")]
#[command(about = "Validate side lengths and classify triangles")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate and classify one candidate given as JSON, e.g. '[1.0, 1.5, 1.5]'
    Check {
        sides: String,
        /// Absolute tolerance for side equality (0 = exact)
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Evaluate a JSON array of candidates and write a report plus provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
    /// Draw reproducible random side triples and classify them (JSON lines)
    Sample {
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        valid_only: bool,
        #[arg(long, default_value_t = 0.0)]
        len_min: f64,
        #[arg(long, default_value_t = 2.0)]
        len_max: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { sides, eps } => check(&sides, eps),
        Action::Batch { input, out, eps } => batch(input, out, eps, cmd.tag),
        Action::Sample {
            count,
            seed,
            valid_only,
            len_min,
            len_max,
        } => sample(
            count,
            seed,
            SideCfg {
                len_min,
                len_max,
                valid_only,
                ..SideCfg::default()
            },
        ),
        Action::Report => report(cmd.tag),
    }
}

/// One evaluated candidate in a batch report.
#[derive(Debug, Serialize, PartialEq)]
struct Row {
    input: Value,
    valid: bool,
    message: String,
    #[serde(rename = "type")]
    triangle_type: Option<TriangleType>,
}

fn evaluate(input: Value, cfg: TriCfg) -> Row {
    match Triangle::from_value(&input) {
        Ok(t) => {
            let [a, b, c] = t.side_array();
            Row {
                input,
                valid: true,
                message: String::new(),
                triangle_type: Some(classify_with(cfg, a, b, c)),
            }
        }
        Err(err) => {
            tracing::debug!(kind = %err.kind(), input = %input, "rejected");
            Row {
                input,
                valid: false,
                message: err.to_string(),
                triangle_type: None,
            }
        }
    }
}

fn tolerance(eps: f64) -> Result<TriCfg> {
    if !(eps.is_finite() && eps >= 0.0) {
        bail!("--eps must be finite and non-negative, got {eps}");
    }
    Ok(TriCfg { eps_eq: eps })
}

fn check(sides: &str, eps: f64) -> Result<()> {
    let cfg = tolerance(eps)?;
    let value: Value =
        serde_json::from_str(sides).with_context(|| format!("parsing sides {sides:?} as JSON"))?;
    tracing::info!(sides, eps, "check");
    let row = evaluate(value, cfg);
    match row.triangle_type {
        Some(t) => println!("The triangle sides {} is {t}", row.input),
        None => println!("{}", row.message),
    }
    Ok(())
}

/// Counts for a finished batch.
#[derive(Debug, PartialEq)]
struct Summary {
    total: usize,
    valid: usize,
}

fn run_batch(input: &Path, out: &Path, cfg: TriCfg) -> Result<Summary> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let doc: Value = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing {} as JSON", input.display()))?;
    let candidates = match doc {
        Value::Array(items) => items,
        other => bail!("expected a JSON array of candidates, found {other}"),
    };
    let rows: Vec<Row> = candidates.into_iter().map(|c| evaluate(c, cfg)).collect();
    let summary = Summary {
        total: rows.len(),
        valid: rows.iter().filter(|r| r.valid).count(),
    };

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(summary)
}

fn batch(input: String, out: String, eps: f64, tag: Option<String>) -> Result<()> {
    let cfg = tolerance(eps)?;
    tracing::info!(input, out, eps, tag = ?tag, "batch");
    let summary = run_batch(Path::new(&input), Path::new(&out), cfg)?;
    tracing::info!(total = summary.total, valid = summary.valid, "batch_done");

    let params = json!({
        "input": input,
        "eps": eps,
        "total": summary.total,
        "valid": summary.valid,
    });
    let prov = provenance::Provenance::for_report(Path::new(&out), params, tag).write()?;
    tracing::info!(provenance = %prov.display(), "wrote_provenance");
    Ok(())
}

fn sample_rows(count: u64, seed: u64, cfg: SideCfg) -> Result<Vec<Value>> {
    (0..count)
        .map(|index| -> Result<Value> {
            let sides = draw_sides(cfg, ReplayToken { seed, index })?;
            let row = evaluate(json!(sides), TriCfg::default());
            Ok(json!({
                "index": index,
                "sides": sides,
                "valid": row.valid,
                "type": row.triangle_type,
            }))
        })
        .collect()
}

fn sample(count: u64, seed: u64, cfg: SideCfg) -> Result<()> {
    tracing::info!(count, seed, valid_only = cfg.valid_only, "sample");
    for row in sample_rows(count, seed, cfg)? {
        println!("{row}");
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": triangles::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn evaluate_valid_and_invalid() {
        let row = evaluate(json!([1.0, 1.5, 1.5]), TriCfg::default());
        assert!(row.valid);
        assert_eq!(row.triangle_type, Some(TriangleType::Isosceles));
        assert!(row.message.is_empty());

        let row = evaluate(json!("unicorn"), TriCfg::default());
        assert!(!row.valid);
        assert_eq!(row.triangle_type, None);
        assert!(row.message.starts_with("TypeMismatch"));
    }

    #[test]
    fn evaluate_respects_tolerance() {
        let sides = json!([0.1 + 0.2, 0.3, 0.5]);
        let exact = evaluate(sides.clone(), TriCfg::default());
        assert_eq!(exact.triangle_type, Some(TriangleType::Scalene));
        let loose = evaluate(sides, TriCfg { eps_eq: 1e-9 });
        assert_eq!(loose.triangle_type, Some(TriangleType::Isosceles));
    }

    #[test]
    fn tolerance_rejects_negative_and_nan() {
        assert!(tolerance(-1.0).is_err());
        assert!(tolerance(f64::NAN).is_err());
        assert_eq!(tolerance(0.0).unwrap(), TriCfg::default());
    }

    #[test]
    fn run_batch_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(
            &input,
            r#"[[1.0, 1.0, 1.0], [1.0, 0.7, 0.5, 0.6], null, [1.0, 2.0, "unicorn"], [3, 4, 5]]"#,
        )
        .unwrap();
        let out = dir.path().join("nested").join("report.json");
        let summary = run_batch(&input, &out, TriCfg::default()).unwrap();
        assert_eq!(summary, Summary { total: 5, valid: 2 });

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["type"], "EQUILATERAL");
        assert_eq!(parsed[1]["valid"], false);
        assert!(parsed[1]["message"]
            .as_str()
            .unwrap()
            .starts_with("WrongArity"));
        assert_eq!(parsed[2]["type"], Value::Null);
        assert_eq!(parsed[4]["type"], "SCALENE");
    }

    #[test]
    fn run_batch_rejects_non_array_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, r#"{"sides": [1, 1, 1]}"#).unwrap();
        let out = dir.path().join("report.json");
        assert!(run_batch(&input, &out, TriCfg::default()).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn sample_rows_are_reproducible() {
        let cfg = SideCfg {
            valid_only: true,
            ..SideCfg::default()
        };
        let a = sample_rows(5, 9, cfg).unwrap();
        let b = sample_rows(5, 9, cfg).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|r| r["valid"] == true));
    }

    #[test]
    fn cli_parses_subcommands() {
        let cmd = Cmd::try_parse_from(["triangles", "--tag", "t1", "check", "[1, 1, 1]"]).unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        assert!(matches!(cmd.action, Action::Check { eps, .. } if eps == 0.0));
        let cmd = Cmd::try_parse_from(["triangles", "sample", "--count", "3", "--valid-only"])
            .unwrap();
        assert!(matches!(
            cmd.action,
            Action::Sample {
                count: 3,
                valid_only: true,
                ..
            }
        ));
    }
}
