use crate::domain::errors::StitchError;
use crate::domain::models::{ErrorBody, JsonError, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// The `{ok: false, error}` envelope for a failed run. Errors that are not a
/// `StitchError` get the `ERROR` code.
pub fn error_json(err: &anyhow::Error) -> JsonError {
    let typed = err.downcast_ref::<StitchError>();
    JsonError {
        ok: false,
        error: ErrorBody {
            code: typed.map(StitchError::code).unwrap_or("ERROR").to_string(),
            message: err.to_string(),
            cycle: match typed {
                Some(StitchError::CyclicDependency { cycle }) => Some(cycle.clone()),
                _ => None,
            },
        },
    }
}

/// Report a failed run: JSON on stdout with `--json`, otherwise stderr.
pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        match serde_json::to_string_pretty(&error_json(err)) {
            Ok(s) => println!("{s}"),
            Err(_) => eprintln!("error: {err}"),
        }
    } else {
        eprintln!("error: {err}");
    }
}
