use std::env;
use std::process;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use dnirobocze::time::calendar::calendarerror::CalendarError;
use dnirobocze::time::calendar::holidaycalendar::HolidayCalendar;
use dnirobocze::time::calendar::polishcalendar::PolishCalendar;

const USAGE: &str = "\
Kalkulator dni roboczych w Polsce (uwzględnia weekendy i święta).

Użycie:
  dnirobocze count <start> <koniec>     Policz dni robocze między dwiema datami (włącznie).
  dnirobocze holidays <rok> [--json]    Wyświetl święta ustawowe w danym roku.
  dnirobocze add <start> <dni>          Dodaj/odejmij dni robocze od daty.

Daty: YYYY-MM-DD, YYYY.MM.DD, \"YYYY MM DD\", today/dzisiaj, +N lub -N (dni od dzisiaj).";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let code = match args.first().map(String::as_str) {
        Some("count") => cmd_count(&args[1..]),
        Some("holidays") => cmd_holidays(&args[1..]),
        Some("add") => cmd_add(&args[1..]),
        _ => {
            eprintln!("{USAGE}");
            2
        }
    };
    process::exit(code);
}

fn cmd_count(args: &[String]) -> i32 {
    let [start, end] = args else {
        eprintln!("{USAGE}");
        return 2;
    };
    let result = parse_date(start)
        .and_then(|s| parse_date(end).map(|e| (s, e)))
        .and_then(|(s, e)| PolishCalendar::new().count_business_days(s, e).map(|n| (s, e, n)));
    match result {
        Ok((start, end, count)) => {
            println!("Dni robocze od {start} do {end}: {count}");
            0
        }
        Err(err) => fail(&err),
    }
}

fn cmd_holidays(args: &[String]) -> i32 {
    let (year_arg, as_json) = match args {
        [year] => (year, false),
        [year, flag] if flag == "--json" => (year, true),
        _ => {
            eprintln!("{USAGE}");
            return 2;
        }
    };
    let Ok(year) = year_arg.parse::<i32>() else {
        return fail(&CalendarError::InvalidDate(year_arg.clone()));
    };

    let set = match PolishCalendar::new().get_holiday_set(year) {
        Ok(set) => set,
        Err(err) => return fail(&err),
    };

    if as_json {
        // Serialization of a plain map of dates cannot fail.
        println!("{}", serde_json::to_string_pretty(&set).expect("holiday set is serializable"));
        return 0;
    }

    println!("Święta ustawowe w {year} roku:");
    println!("{:<14} {:<16} Nazwa", "Data", "Dzień tygodnia");
    println!("{}", "-".repeat(56));
    for holiday in set.iter() {
        println!(
            "{:<14} {:<16} {}",
            holiday.date().to_string(),
            weekday_name_pl(holiday.date().weekday()),
            holiday.name()
        );
    }
    0
}

fn cmd_add(args: &[String]) -> i32 {
    let [start, days] = args else {
        eprintln!("{USAGE}");
        return 2;
    };
    let Ok(n) = days.parse::<i32>() else {
        eprintln!("Błąd: nieprawidłowa liczba dni: '{days}'");
        return 1;
    };
    let result =
        parse_date(start).and_then(|s| PolishCalendar::new().shift_n_business_day(s, n).map(|d| (s, d)));
    match result {
        Ok((start, shifted)) => {
            let direction = if n >= 0 { "dodaniu" } else { "odjęciu" };
            println!(
                "Po {direction} {} dni roboczych od {start}: {shifted} ({})",
                n.abs(),
                weekday_name_pl(shifted.weekday())
            );
            0
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &CalendarError) -> i32 {
    eprintln!("Błąd: {}", describe_error(err));
    1
}

/// Polish user-facing messages for the core error kinds.
fn describe_error(err: &CalendarError) -> String {
    match err {
        CalendarError::UnsupportedYear { year, min, max } => {
            format!("rok {year} nie jest obsługiwany (obsługiwane lata: {min}-{max})")
        }
        CalendarError::InvalidDate(input) => {
            format!("nieprawidłowa data: '{input}' (użyj formatu YYYY-MM-DD)")
        }
        CalendarError::InvalidRange { .. } => {
            "data początkowa nie może być późniejsza niż data końcowa".to_owned()
        }
    }
}

/// Accepts YYYY-MM-DD, YYYY.MM.DD and "YYYY MM DD", plus the relative
/// tokens `today`/`dzisiaj` and `+N`/`-N` calendar days from today.
fn parse_date(arg: &str) -> Result<NaiveDate, CalendarError> {
    if arg == "today" || arg == "dzisiaj" {
        return Ok(Local::now().date_naive());
    }
    if let Some(rest) = arg.strip_prefix('+') {
        if let Ok(days) = rest.parse::<i64>() {
            return Ok(Local::now().date_naive() + Duration::days(days));
        }
    }
    if arg.starts_with('-') {
        if let Ok(days) = arg.parse::<i64>() {
            return Ok(Local::now().date_naive() + Duration::days(days));
        }
    }

    let normalized = arg.replace(['.', ' '], "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(arg.to_owned()))
}

fn weekday_name_pl(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "poniedziałek",
        Weekday::Tue => "wtorek",
        Weekday::Wed => "środa",
        Weekday::Thu => "czwartek",
        Weekday::Fri => "piątek",
        Weekday::Sat => "sobota",
        Weekday::Sun => "niedziela",
    }
}
