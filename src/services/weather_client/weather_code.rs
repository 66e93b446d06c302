/// Human readable label for a WMO weather code, as reported by Open-Meteo.
pub fn describe_weather_code(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        51 | 53 => "Drizzle",
        61 | 63 | 65 => "Rain",
        _ => "Unknown",
    }
}
