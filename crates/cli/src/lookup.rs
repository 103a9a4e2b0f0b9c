use crate::output;
use rootwalk_application::use_cases::CollectRecordsUseCase;
use std::io::Write;

/// Looks up every name in turn and prints its records to `out`.
///
/// A failing name is reported on `err` and does not stop the rest. Returns
/// how many names failed.
pub async fn lookup_names<W: Write, E: Write>(
    use_case: &CollectRecordsUseCase,
    names: &[String],
    json: bool,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<usize> {
    let mut failed = 0usize;

    for name in names {
        match use_case.execute(name).await {
            Ok(result) => {
                if json {
                    writeln!(out, "{}", output::json_line(name, &result)?)?;
                } else {
                    for line in output::host_lines(&result) {
                        writeln!(out, "{}", line)?;
                    }
                }
            }
            Err(e) => {
                failed += 1;
                writeln!(err, "rootwalk: {}: {}", name, e)?;
            }
        }
    }

    Ok(failed)
}
