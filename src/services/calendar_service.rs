use crate::models::{AccommodationRow, ItineraryItemRow, MatchRow, TripRow};

/// Assembles the trip calendar as an ICS document: one VEVENT per match,
/// accommodation, and itinerary item. Dates are stored as ISO-8601 strings
/// and reformatted by string transform; times are floating local times,
/// which is what you want on a road trip that crosses timezones.
pub fn build_ics(
    trip: &TripRow,
    matches: &[MatchRow],
    accommodations: &[AccommodationRow],
    itinerary: &[ItineraryItemRow],
) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//roadtrip//trip-calendar//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(&trip.name)),
    ];

    for m in matches {
        let Some(kickoff) = m.kickoff_at.as_deref().and_then(ics_datetime) else {
            continue;
        };
        let summary = match m.stage.as_deref() {
            Some(stage) if !stage.is_empty() => {
                format!("{} vs {} ({})", m.home_team, m.away_team, stage)
            }
            _ => format!("{} vs {}", m.home_team, m.away_team),
        };
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:match-{}@roadtrip", m.id));
        lines.push(format!("DTSTART:{}", kickoff));
        lines.push("DURATION:PT2H".to_string());
        lines.push(format!("SUMMARY:{}", escape_text(&summary)));
        if let Some(venue) = m.venue.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("LOCATION:{}", escape_text(venue)));
        }
        if let Some(status) = m.ticket_status.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("DESCRIPTION:{}", escape_text(&format!("Tickets: {}", status))));
        }
        lines.push("END:VEVENT".to_string());
    }

    for acc in accommodations {
        let Some(check_in) = acc.check_in.as_deref().and_then(ics_date) else {
            continue;
        };
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:accommodation-{}@roadtrip", acc.id));
        lines.push(format!("DTSTART;VALUE=DATE:{}", check_in));
        if let Some(check_out) = acc.check_out.as_deref().and_then(ics_date) {
            lines.push(format!("DTEND;VALUE=DATE:{}", check_out));
        }
        lines.push(format!("SUMMARY:{}", escape_text(&acc.name)));
        if let Some(address) = acc.address.as_deref().filter(|a| !a.is_empty()) {
            lines.push(format!("LOCATION:{}", escape_text(address)));
        }
        if let Some(booking_ref) = acc.booking_ref.as_deref().filter(|b| !b.is_empty()) {
            lines.push(format!(
                "DESCRIPTION:{}",
                escape_text(&format!("Booking ref: {}", booking_ref))
            ));
        }
        lines.push("END:VEVENT".to_string());
    }

    for item in itinerary {
        let Some(day) = ics_date(&item.day) else {
            continue;
        };
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:itinerary-{}@roadtrip", item.id));
        match item.start_time.as_deref().and_then(ics_time) {
            Some(start) => {
                lines.push(format!("DTSTART:{}T{}", day, start));
                match item.end_time.as_deref().and_then(ics_time) {
                    Some(end) => lines.push(format!("DTEND:{}T{}", day, end)),
                    None => lines.push("DURATION:PT1H".to_string()),
                }
            }
            None => lines.push(format!("DTSTART;VALUE=DATE:{}", day)),
        }
        lines.push(format!("SUMMARY:{}", escape_text(&item.title)));
        if let Some(notes) = item.notes.as_deref().filter(|n| !n.is_empty()) {
            lines.push(format!("DESCRIPTION:{}", escape_text(notes)));
        }
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n") + "\r\n"
}

/// RFC 5545 text escaping: backslash, semicolon, comma, newline.
fn escape_text(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// "2026-06-14" -> "20260614"
fn ics_date(raw: &str) -> Option<String> {
    let digits: String = raw.trim().chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return None;
    }
    Some(digits)
}

/// "18:00" or "18:00:30" -> "180000"
fn ics_time(raw: &str) -> Option<String> {
    let digits: String = raw.trim().chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        4 => Some(format!("{}00", digits)),
        6 => Some(digits),
        _ => None,
    }
}

/// "2026-06-14T18:00" -> "20260614T180000"
fn ics_datetime(raw: &str) -> Option<String> {
    let (date, time) = raw.trim().split_once('T')?;
    Some(format!("{}T{}", ics_date(date)?, ics_time(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> TripRow {
        TripRow {
            id: "t1".to_string(),
            name: "Copa Road Trip".to_string(),
            code: "ABC123".to_string(),
            start_date: None,
            end_date: None,
            created_at: "2026-01-01 00:00:00".to_string(),
        }
    }

    fn fixture_match() -> MatchRow {
        MatchRow {
            id: "m1".to_string(),
            trip_id: "t1".to_string(),
            stop_id: None,
            home_team: "Netherlands".to_string(),
            away_team: "Argentina".to_string(),
            venue: Some("Estadio Azteca".to_string()),
            kickoff_at: Some("2026-06-14T18:00".to_string()),
            stage: Some("Group A".to_string()),
            ticket_status: None,
            created_at: "2026-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn escapes_rfc5545_specials() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn reformats_iso_datetimes() {
        assert_eq!(
            ics_datetime("2026-06-14T18:00").as_deref(),
            Some("20260614T180000")
        );
        assert_eq!(
            ics_datetime("2026-06-14T18:00:30").as_deref(),
            Some("20260614T180030")
        );
        assert_eq!(ics_datetime("2026-06-14"), None);
        assert_eq!(ics_date("2026-06-14").as_deref(), Some("20260614"));
        assert_eq!(ics_date("junk"), None);
    }

    #[test]
    fn one_vevent_per_source_row() {
        let acc = AccommodationRow {
            id: "a1".to_string(),
            trip_id: "t1".to_string(),
            stop_id: "s1".to_string(),
            name: "Hostal Centro".to_string(),
            address: None,
            check_in: Some("2026-06-13".to_string()),
            check_out: Some("2026-06-15".to_string()),
            booking_ref: None,
            price_cents: None,
            url: None,
            created_at: "2026-01-01 00:00:00".to_string(),
        };
        let item = ItineraryItemRow {
            id: "i1".to_string(),
            trip_id: "t1".to_string(),
            stop_id: None,
            title: "Drive to Monterrey".to_string(),
            day: "2026-06-15".to_string(),
            start_time: Some("09:00".to_string()),
            end_time: Some("14:30".to_string()),
            kind: Some("drive".to_string()),
            notes: None,
            created_at: "2026-01-01 00:00:00".to_string(),
        };

        let ics = build_ics(&trip(), &[fixture_match()], &[acc], &[item]);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert!(ics.contains("SUMMARY:Netherlands vs Argentina (Group A)"));
        assert!(ics.contains("DTSTART:20260614T180000"));
        assert!(ics.contains("DURATION:PT2H"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20260613"));
        assert!(ics.contains("DTEND;VALUE=DATE:20260615"));
        assert!(ics.contains("DTSTART:20260615T090000"));
        assert!(ics.contains("DTEND:20260615T143000"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn match_without_kickoff_is_skipped() {
        let mut m = fixture_match();
        m.kickoff_at = None;
        let ics = build_ics(&trip(), &[m], &[], &[]);
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 0);
    }
}
