use super::TimezoneEntry;

const fn tz(id: &'static str, label: &'static str, offset: f64) -> TimezoneEntry {
    TimezoneEntry { id, label, offset }
}

/// Selectable zones, ordered by offset. Resolution falls back to the first
/// entry, so order matters.
pub static TIMEZONES: [TimezoneEntry; 56] = [
    tz("Pacific/Midway", "(UTC-11:00) Midway Island, American Samoa", -11.0),
    tz("Pacific/Honolulu", "(UTC-10:00) Hawaii", -10.0),
    tz("America/Anchorage", "(UTC-09:00) Alaska", -9.0),
    tz("America/Los_Angeles", "(UTC-08:00) Pacific Time (US & Canada)", -8.0),
    tz("America/Tijuana", "(UTC-08:00) Tijuana, Baja California", -8.0),
    tz("America/Denver", "(UTC-07:00) Mountain Time (US & Canada)", -7.0),
    tz("America/Phoenix", "(UTC-07:00) Arizona", -7.0),
    tz("America/Chihuahua", "(UTC-07:00) Chihuahua, La Paz, Mazatlan", -7.0),
    tz("America/Chicago", "(UTC-06:00) Central Time (US & Canada)", -6.0),
    tz("America/Mexico_City", "(UTC-06:00) Mexico City", -6.0),
    tz("America/Regina", "(UTC-06:00) Saskatchewan", -6.0),
    tz("America/New_York", "(UTC-05:00) Eastern Time (US & Canada)", -5.0),
    tz("America/Bogota", "(UTC-05:00) Bogota, Lima, Quito", -5.0),
    tz("America/Caracas", "(UTC-04:00) Caracas", -4.0),
    tz("America/Halifax", "(UTC-04:00) Atlantic Time (Canada)", -4.0),
    tz("America/Santiago", "(UTC-04:00) Santiago", -4.0),
    tz("America/St_Johns", "(UTC-03:30) Newfoundland", -3.5),
    tz("America/Sao_Paulo", "(UTC-03:00) Brasilia", -3.0),
    tz("America/Argentina/Buenos_Aires", "(UTC-03:00) Buenos Aires", -3.0),
    tz("America/Godthab", "(UTC-03:00) Greenland", -3.0),
    tz("Atlantic/South_Georgia", "(UTC-02:00) Mid-Atlantic", -2.0),
    tz("Atlantic/Azores", "(UTC-01:00) Azores", -1.0),
    tz("Atlantic/Cape_Verde", "(UTC-01:00) Cape Verde Islands", -1.0),
    tz("Europe/London", "(UTC+00:00) London, Dublin, Lisbon", 0.0),
    tz("Europe/Paris", "(UTC+01:00) Paris, Brussels, Madrid", 1.0),
    tz("Europe/Berlin", "(UTC+01:00) Berlin, Rome, Amsterdam", 1.0),
    tz("Africa/Lagos", "(UTC+01:00) West Central Africa", 1.0),
    tz("Europe/Athens", "(UTC+02:00) Athens, Istanbul, Helsinki", 2.0),
    tz("Africa/Cairo", "(UTC+02:00) Cairo", 2.0),
    tz("Africa/Johannesburg", "(UTC+02:00) Johannesburg, Pretoria", 2.0),
    tz("Europe/Moscow", "(UTC+03:00) Moscow, St. Petersburg", 3.0),
    tz("Asia/Baghdad", "(UTC+03:00) Baghdad", 3.0),
    tz("Asia/Kuwait", "(UTC+03:00) Kuwait, Riyadh", 3.0),
    tz("Asia/Tehran", "(UTC+03:30) Tehran", 3.5),
    tz("Asia/Dubai", "(UTC+04:00) Abu Dhabi, Muscat", 4.0),
    tz("Asia/Baku", "(UTC+04:00) Baku, Tbilisi, Yerevan", 4.0),
    tz("Asia/Kabul", "(UTC+04:30) Kabul", 4.5),
    tz("Asia/Karachi", "(UTC+05:00) Islamabad, Karachi", 5.0),
    tz("Asia/Kolkata", "(UTC+05:30) Mumbai, Kolkata, New Delhi", 5.5),
    tz("Asia/Kathmandu", "(UTC+05:45) Kathmandu", 5.75),
    tz("Asia/Dhaka", "(UTC+06:00) Dhaka, Astana", 6.0),
    tz("Asia/Yangon", "(UTC+06:30) Yangon (Rangoon)", 6.5),
    tz("Asia/Bangkok", "(UTC+07:00) Bangkok, Hanoi, Jakarta", 7.0),
    tz("Asia/Hong_Kong", "(UTC+08:00) Hong Kong, Beijing, Singapore", 8.0),
    tz("Asia/Shanghai", "(UTC+08:00) Shanghai, Taipei", 8.0),
    tz("Australia/Perth", "(UTC+08:00) Perth", 8.0),
    tz("Asia/Tokyo", "(UTC+09:00) Tokyo, Seoul, Osaka", 9.0),
    tz("Australia/Adelaide", "(UTC+09:30) Adelaide", 9.5),
    tz("Australia/Darwin", "(UTC+09:30) Darwin", 9.5),
    tz("Australia/Sydney", "(UTC+10:00) Sydney, Melbourne, Brisbane", 10.0),
    tz("Australia/Hobart", "(UTC+10:00) Hobart", 10.0),
    tz("Pacific/Guam", "(UTC+10:00) Guam, Port Moresby", 10.0),
    tz("Pacific/Noumea", "(UTC+11:00) Solomon Islands, New Caledonia", 11.0),
    tz("Pacific/Auckland", "(UTC+12:00) Auckland, Wellington", 12.0),
    tz("Pacific/Fiji", "(UTC+12:00) Fiji, Kamchatka", 12.0),
    tz("Pacific/Tongatapu", "(UTC+13:00) Nuku'alofa", 13.0),
];
