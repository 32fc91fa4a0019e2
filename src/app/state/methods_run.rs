use super::*;

impl DashboardState {
    /// Starts a new run. Validation problems stop here, before any request
    /// is made, and leave the current report untouched.
    pub(crate) fn start_run(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                self.notice = Some(err.to_string());
                return;
            }
        };

        self.run_id = self.run_id.wrapping_add(1);
        self.mode = AppMode::Loading;
        self.notice = Some(format!(
            "Fetching {} for {} location(s)...",
            request.parameter.id,
            request.locations.len()
        ));

        let run_id = self.run_id;
        let weather = self.weather.clone();
        let air_quality = self.air_quality.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match run_comparison(&weather, &air_quality, &request).await {
                Ok(report) => AppEvent::RunSucceeded {
                    run_id,
                    report: Box::new(report),
                },
                Err(err) => AppEvent::RunFailed {
                    run_id,
                    message: err.to_string(),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    pub(crate) fn is_current_run(&self, run_id: u64) -> bool {
        run_id == self.run_id
    }

    pub(crate) fn handle_run_succeeded(&mut self, run_id: u64, report: ComparisonReport) {
        if !self.is_current_run(run_id) {
            debug!(run_id, current = self.run_id, "discarding stale run result");
            return;
        }
        self.report = Some(report);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.notice = None;
    }

    pub(crate) fn handle_run_failed(&mut self, run_id: u64, message: String) {
        if !self.is_current_run(run_id) {
            debug!(run_id, current = self.run_id, "discarding stale run failure");
            return;
        }
        self.mode = AppMode::Error;
        self.notice = None;
        self.last_error = Some(format!("Error during analysis: {message}"));
    }
}
