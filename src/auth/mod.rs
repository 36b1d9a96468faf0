pub mod delay;
pub mod login;
pub mod register;

pub use delay::{Delay, FixedDelay, Timings};
pub use login::{LoginForm, Provider};
pub use register::{RegisterForm, Strength};

use tokio::sync::mpsc;

use crate::common::{AuthCommand, AuthEvent};

/// Background task standing in for an auth backend. Each command waits out
/// its simulated latency, is logged locally, and is reported as completed.
pub struct AuthWorker<D> {
    event_sender: mpsc::Sender<AuthEvent>,
    command_receiver: mpsc::Receiver<AuthCommand>,
    delay: D,
    timings: Timings,
}

impl<D: Delay> AuthWorker<D> {
    pub fn new(
        event_sender: mpsc::Sender<AuthEvent>,
        command_receiver: mpsc::Receiver<AuthCommand>,
        delay: D,
        timings: Timings,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            delay,
            timings,
        }
    }

    /// Runs until the UI drops its command sender.
    pub async fn run(mut self) {
        log::info!("Auth worker started");

        while let Some(command) = self.command_receiver.recv().await {
            // Simulated request, then report back to the UI
            let summary = self.handle_command(command).await;
            if self
                .event_sender
                .send(AuthEvent::Completed { summary })
                .await
                .is_err()
            {
                // UI closed
                break;
            }
        }

        log::info!("Auth worker stopped");
    }

    async fn handle_command(&self, command: AuthCommand) -> String {
        match command {
            AuthCommand::Login(form) => {
                self.delay.wait(self.timings.submit).await;
                log::info!(
                    "Login submitted: email={} remember_me={}",
                    form.email,
                    form.remember_me
                );
                format!("Signed in as {}", display_email(&form.email))
            }
            AuthCommand::Register(form) => {
                self.delay.wait(self.timings.submit).await;
                log::info!(
                    "Signup submitted: name={} {} email={} newsletter={}",
                    form.first_name,
                    form.last_name,
                    form.email,
                    form.subscribe_newsletter
                );
                format!("Account created for {}", display_email(&form.email))
            }
            AuthCommand::Social { provider, signup } => {
                self.delay.wait(self.timings.social).await;
                let action = if signup { "signup" } else { "login" };
                log::info!("{} {action}", provider.name());
                format!("{} {action} complete", provider.name())
            }
        }
    }
}

fn display_email(email: &str) -> &str {
    let email = email.trim();
    if email.is_empty() { "guest" } else { email }
}

#[cfg(test)]
mod tests {
    use super::delay::NoDelay;
    use super::*;

    fn spawn_worker() -> (mpsc::Sender<AuthCommand>, mpsc::Receiver<AuthEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(4);
        let (event_tx, event_rx) = mpsc::channel(4);
        tokio::spawn(AuthWorker::new(event_tx, cmd_rx, NoDelay, Timings::default()).run());
        (cmd_tx, event_rx)
    }

    #[tokio::test]
    async fn register_reports_completion() {
        let (cmd_tx, mut event_rx) = spawn_worker();
        let form = RegisterForm {
            email: "ada@example.com".into(),
            password: "abc123".into(),
            confirm_password: "abc123".into(),
            agree_to_terms: true,
            ..RegisterForm::default()
        };
        cmd_tx.send(AuthCommand::Register(form)).await.unwrap();

        assert_eq!(
            event_rx.recv().await,
            Some(AuthEvent::Completed {
                summary: "Account created for ada@example.com".into()
            })
        );
    }

    #[tokio::test]
    async fn commands_complete_in_order() {
        let (cmd_tx, mut event_rx) = spawn_worker();
        cmd_tx
            .send(AuthCommand::Login(LoginForm::default()))
            .await
            .unwrap();
        cmd_tx
            .send(AuthCommand::Social {
                provider: Provider::Facebook,
                signup: true,
            })
            .await
            .unwrap();

        let Some(AuthEvent::Completed { summary }) = event_rx.recv().await else {
            panic!("worker stopped early");
        };
        assert_eq!(summary, "Signed in as guest");
        let Some(AuthEvent::Completed { summary }) = event_rx.recv().await else {
            panic!("worker stopped early");
        };
        assert_eq!(summary, "Facebook signup complete");
    }

    #[tokio::test]
    async fn worker_stops_when_ui_goes_away() {
        let (cmd_tx, cmd_rx) = mpsc::channel(1);
        let (event_tx, _event_rx) = mpsc::channel(1);
        let handle = tokio::spawn(AuthWorker::new(event_tx, cmd_rx, NoDelay, Timings::default()).run());
        drop(cmd_tx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_holds_the_reply() {
        let (cmd_tx, cmd_rx) = mpsc::channel(1);
        let (event_tx, mut event_rx) = mpsc::channel(1);
        tokio::spawn(AuthWorker::new(event_tx, cmd_rx, FixedDelay, Timings::default()).run());

        let start = tokio::time::Instant::now();
        cmd_tx
            .send(AuthCommand::Login(LoginForm::default()))
            .await
            .unwrap();
        event_rx.recv().await.unwrap();
        assert!(start.elapsed() >= Timings::default().submit);
    }
}
