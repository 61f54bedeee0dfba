use std::process::ExitCode;

mod browser;

fn main() -> ExitCode {
    match browser::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "browser exited with an error");
            ExitCode::FAILURE
        }
    }
}
