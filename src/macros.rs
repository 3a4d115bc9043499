/// Prints a line to stdout prefixed with the local timestamp.
/// Given a start time as the first argument it also prints the seconds elapsed since then.
/// ```
/// # use medline_scrap::info_time;
/// info_time!("processing document #: {}", 20000000);
/// let time = chrono::Local::now();
/// info_time!(time, "Extracted {} abstracts", 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let res = format!("{:<30} : {}", local_now, format!($strfm, $($arg),*));
        println!("{}", res);
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        let res = format!("{:<30} : {}\nRUNTIME: {} sec", local_now, format!($strfm, $($arg),*), run_time);
        println!("{}", res);
    }};
}
