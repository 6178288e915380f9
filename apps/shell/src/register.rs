use crate::args::RegisterArgs;
use anyhow::Context;
use nwatch::domain::config::ClientConfig;
use nwatch::features::registration::{BannerKind, SubmitOutcome, SubmitRejection};
use std::process::ExitCode;
use tokio::sync::mpsc;
use tracing::debug;

/// Fills the form from the arguments, submits it and prints the feedback.
pub async fn run(config: &ClientConfig, args: RegisterArgs) -> anyhow::Result<ExitCode> {
    let (routes, mut navigated) = mpsc::unbounded_channel();
    let form = nwatch::registration_form(config, routes).context("Invalid API configuration")?;

    form.set_first_name(args.first_name);
    form.set_last_name(args.last_name);
    form.set_email(args.email);
    form.set_notification_enabled(!args.no_notifications);

    let outcome = form.submit().await;
    debug!(?outcome, "Submit finished");
    let view = form.view();

    match outcome {
        SubmitOutcome::Rejected(SubmitRejection::Invalid) => {
            for (label, message) in view.visible_errors() {
                println!("{label}: {message}");
            }
            Ok(ExitCode::FAILURE)
        },
        SubmitOutcome::Rejected(SubmitRejection::AlreadySubmitting) => {
            println!("A registration is already in progress.");
            Ok(ExitCode::FAILURE)
        },
        SubmitOutcome::Settled(_) => {
            let Some(banner) = view.banner else {
                return Ok(ExitCode::FAILURE);
            };
            println!("{}", banner.message);

            if banner.kind == BannerKind::Failure {
                return Ok(ExitCode::FAILURE);
            }

            if let Some(route) = navigated.recv().await {
                println!("Redirected to {route}");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
