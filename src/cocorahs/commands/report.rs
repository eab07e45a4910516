use super::station::{self, StationPicker};
use super::{CmdMessage, ReportResult};
use crate::api::CocorahsApi;
use crate::error::Result;
use crate::model::{Precipitation, ReportOutcome};
use crate::transport::Transport;
use chrono::NaiveDateTime;

/// Everything needed to file one daily report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub station: Option<String>,
    pub precipitation: Precipitation,
    pub observed_at: Option<NaiveDateTime>,
}

/// Resolves the station, submits the report and describes the outcome.
pub fn run<T: Transport, P: StationPicker + ?Sized>(
    api: &CocorahsApi<T>,
    request: ReportRequest,
    picker: &mut P,
) -> Result<ReportResult> {
    let station = station::resolve(api, request.station, picker)?;
    let outcome = api.new_report(&station, request.precipitation, request.observed_at)?;

    let message = outcome_message(&outcome);
    let mut result = ReportResult::new(station, outcome);
    result.add_message(message);
    Ok(result)
}

/// The line shown to the user for a report outcome.
pub fn outcome_message(outcome: &ReportOutcome) -> CmdMessage {
    match outcome {
        ReportOutcome::Rejected { message } => CmdMessage::error(format!("error - {}", message)),
        ReportOutcome::Created { .. } => {
            let url = outcome.report_url().unwrap_or_default();
            CmdMessage::success(format!("Created new report: {}", url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::station::testing::ScriptedPicker;
    use crate::commands::MessageLevel;
    use crate::error::CocorahsError;
    use crate::model::Credentials;
    use crate::transport::memory::fixtures::*;
    use crate::transport::memory::MemoryTransport;

    fn api(transport: MemoryTransport) -> CocorahsApi<MemoryTransport> {
        CocorahsApi::new(transport, Credentials::new("observer", "secret"))
    }

    fn request(station: Option<&str>, precipitation: Precipitation) -> ReportRequest {
        ReportRequest {
            station: station.map(String::from),
            precipitation,
            observed_at: None,
        }
    }

    #[test]
    fn test_created_message_is_exact() {
        let message = outcome_message(&ReportOutcome::Created {
            uid: "12345".to_string(),
        });
        assert_eq!(message.level, MessageLevel::Success);
        assert_eq!(
            message.content,
            "Created new report: https://www.cocorahs.org/ViewData/ViewDailyPrecipReport.aspx?DailyPrecipReportID=12345"
        );
    }

    #[test]
    fn test_rejected_message_is_exact() {
        let message = outcome_message(&ReportOutcome::Rejected {
            message: "bad station".to_string(),
        });
        assert_eq!(message.level, MessageLevel::Error);
        assert_eq!(message.content, "error - bad station");
    }

    #[test]
    fn test_single_station_account_reports_verbatim() {
        let api = api(account_with_stations(&["IL-PR-1"], "777"));
        let mut picker = ScriptedPicker::new(&[]);

        let result = run(&api, request(None, Precipitation::Amount(0.5)), &mut picker).unwrap();

        assert!(result.is_created());
        assert_eq!(result.station, "IL-PR-1");
        assert_eq!(picker.prompts, 0);
        let post = &api.transport().requests_to("DailyPrecipObs")[0];
        assert_eq!(post.form_value("stationNumber"), Some("IL-PR-1"));
        assert_eq!(post.form_value("gaugeCatch"), Some("0.5"));
        assert_eq!(post.form_value("gaugeCatchIsTrace"), Some("false"));
    }

    #[test]
    fn test_trace_with_explicit_station() {
        let api = api(MemoryTransport::new().respond("DailyPrecipObs", created_body("5")));
        let mut picker = ScriptedPicker::new(&[]);

        let result = run(
            &api,
            request(Some("CO-BO-22"), Precipitation::Trace),
            &mut picker,
        )
        .unwrap();

        assert_eq!(result.station, "CO-BO-22");
        assert!(api.transport().requests_to("identity").is_empty());
        let post = &api.transport().requests()[0];
        assert_eq!(post.form_value("gaugeCatch"), Some("0.0"));
        assert_eq!(post.form_value("gaugeCatchIsTrace"), Some("true"));
    }

    #[test]
    fn test_rejected_report() {
        let api = api(
            MemoryTransport::new().respond("DailyPrecipObs", rejected_body("bad station")),
        );
        let mut picker = ScriptedPicker::new(&[]);

        let result = run(
            &api,
            request(Some("NOPE"), Precipitation::Amount(1.0)),
            &mut picker,
        )
        .unwrap();

        assert!(!result.is_created());
        assert_eq!(result.messages, vec![CmdMessage::error("error - bad station")]);
    }

    #[test]
    fn test_no_stations_never_submits() {
        let api = api(account_with_stations(&[], "1"));
        let mut picker = ScriptedPicker::new(&[]);

        let err = run(&api, request(None, Precipitation::Trace), &mut picker).unwrap_err();

        assert!(matches!(err, CocorahsError::NoStations));
        assert!(api.transport().requests_to("DailyPrecipObs").is_empty());
    }
}
