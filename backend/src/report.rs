//! Top-level error reporting for the demo binaries.

use std::process::ExitCode;

pub fn error_report(err: &anyhow::Error) -> String {
    format!("ERROR: {err:#}")
}

/// Maps the outcome of a demo run to its process exit code. Failures are
/// logged and printed to stdout before exiting with 1.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            println!("{}", error_report(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaders::{ShaderError, ShaderStage};

    fn compile_failure() -> anyhow::Error {
        anyhow::Error::new(ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "0:1(10): error: undeclared identifier `vPos'".to_string(),
        })
        .context("loading uniform color shader")
    }

    #[test]
    fn report_contains_compile_log() {
        let report = error_report(&compile_failure());
        assert!(report.starts_with("ERROR: loading uniform color shader: "));
        assert!(report.contains("undeclared identifier `vPos'"));
    }

    #[test]
    fn shader_failure_exits_with_failure() {
        let code = finish(Err(compile_failure()));
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::FAILURE));
        assert_ne!(format!("{:?}", code), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn clean_close_exits_with_success() {
        let code = finish(Ok(()));
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::SUCCESS));
    }
}
