use crate::api::CocorahsApi;
use crate::error::{CocorahsError, Result};
use crate::model::Station;
use crate::transport::Transport;
use log::debug;

/// Asks the user to choose among several stations.
///
/// Implementations return a station number. [`resolve`] re-asks until the
/// answer names one of the offered stations.
pub trait StationPicker {
    fn pick(&mut self, stations: &[Station]) -> Result<String>;

    /// Called after an answer that is not in the list.
    fn rejected(&mut self, _answer: &str, _stations: &[Station]) {}
}

/// The offered station whose number matches `answer` exactly.
pub fn find_choice<'a>(stations: &'a [Station], answer: &str) -> Option<&'a Station> {
    let answer = answer.trim();
    stations.iter().find(|s| s.station_number == answer)
}

/// Picks the station to report for.
///
/// An explicit station wins without contacting the API. Otherwise the
/// account's identity decides: a single station is used as is, several go
/// through `picker`, none is an error.
pub fn resolve<T: Transport, P: StationPicker + ?Sized>(
    api: &CocorahsApi<T>,
    explicit: Option<String>,
    picker: &mut P,
) -> Result<String> {
    if let Some(station) = explicit {
        return Ok(station);
    }

    let identity = api.get_identity()?;
    match identity.stations.as_slice() {
        [] => Err(CocorahsError::NoStations),
        [only] => {
            debug!("using the account's only station {}", only.station_number);
            Ok(only.station_number.clone())
        }
        stations => loop {
            let answer = picker.pick(stations)?;
            match find_choice(stations, &answer) {
                Some(station) => return Ok(station.station_number.clone()),
                None => picker.rejected(&answer, stations),
            }
        },
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedPicker;
    use super::*;
    use crate::model::Credentials;
    use crate::transport::memory::fixtures::identity_body;
    use crate::transport::memory::MemoryTransport;

    fn api_with_stations(stations: &[&str]) -> CocorahsApi<MemoryTransport> {
        CocorahsApi::new(
            MemoryTransport::new().respond("identity", identity_body(stations)),
            Credentials::new("observer", "secret"),
        )
    }

    #[test]
    fn test_explicit_station_skips_identity() {
        let api = api_with_stations(&["A", "B"]);
        let mut picker = ScriptedPicker::new(&[]);

        let station = resolve(&api, Some("IL-PR-9".to_string()), &mut picker).unwrap();

        assert_eq!(station, "IL-PR-9");
        assert!(api.transport().requests().is_empty());
        assert_eq!(picker.prompts, 0);
    }

    #[test]
    fn test_single_station_is_used_without_prompt() {
        let api = api_with_stations(&["IL-PR-1"]);
        let mut picker = ScriptedPicker::new(&[]);

        let station = resolve(&api, None, &mut picker).unwrap();

        assert_eq!(station, "IL-PR-1");
        assert_eq!(picker.prompts, 0);
    }

    #[test]
    fn test_multiple_stations_accept_listed_choice() {
        let api = api_with_stations(&["IL-PR-1", "IL-PR-7"]);
        let mut picker = ScriptedPicker::new(&["IL-PR-7"]);

        let station = resolve(&api, None, &mut picker).unwrap();

        assert_eq!(station, "IL-PR-7");
        assert_eq!(picker.prompts, 1);
        assert!(picker.rejections.is_empty());
    }

    #[test]
    fn test_multiple_stations_reject_unlisted_choice() {
        let api = api_with_stations(&["IL-PR-1", "IL-PR-7"]);
        let mut picker = ScriptedPicker::new(&["IL-PR-3", "il-pr-1", "IL-PR-1"]);

        let station = resolve(&api, None, &mut picker).unwrap();

        assert_eq!(station, "IL-PR-1");
        assert_eq!(picker.prompts, 3);
        assert_eq!(picker.rejections, vec!["IL-PR-3", "il-pr-1"]);
    }

    #[test]
    fn test_running_out_of_answers_is_an_error() {
        let api = api_with_stations(&["A", "B"]);
        let mut picker = ScriptedPicker::new(&["C"]);

        let err = resolve(&api, None, &mut picker).unwrap_err();

        assert!(matches!(err, CocorahsError::NoInput(_)));
    }

    #[test]
    fn test_no_stations_is_an_error() {
        let api = api_with_stations(&[]);
        let mut picker = ScriptedPicker::new(&["anything"]);

        let err = resolve(&api, None, &mut picker).unwrap_err();

        assert!(matches!(err, CocorahsError::NoStations));
        assert_eq!(picker.prompts, 0);
    }

    #[test]
    fn test_find_choice_trims_but_is_exact() {
        let stations = vec![Station::new("A-1"), Station::new("B-2")];
        assert_eq!(find_choice(&stations, " B-2\n").unwrap().station_number, "B-2");
        assert!(find_choice(&stations, "b-2").is_none());
        assert!(find_choice(&stations, "").is_none());
    }
}
