use std::collections::BTreeMap;
use std::fmt;

use crate::notice::{Notice, NoticeSlot};
use crate::timezone::TimezoneEntry;

/// Identifiers of the text fields the controller writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Lat,
    Lon,
    /// Offset of the selected zone
    Zon,
    Rise,
    Set,
}

/// Everything the user sees besides the map.
#[derive(Debug, Default, Clone)]
pub struct Page {
    fields: BTreeMap<FieldId, String>,
    calendar_href: Option<String>,
    timezone: Option<TimezoneEntry>,
    notice: NoticeSlot,
}

impl Page {
    pub fn field(&self, id: FieldId) -> &str {
        self.fields.get(&id).map_or("", String::as_str)
    }

    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields.insert(id, value.into());
    }

    pub fn calendar_href(&self) -> Option<&str> {
        self.calendar_href.as_deref()
    }

    pub fn set_calendar_href(&mut self, href: impl Into<String>) {
        self.calendar_href = Some(href.into());
    }

    /// Selects a zone and mirrors its offset into the `zon` field.
    pub fn select_timezone(&mut self, entry: &TimezoneEntry) {
        self.timezone = Some(*entry);
        self.set_field(FieldId::Zon, entry.offset_text());
    }

    pub fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice.set(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice.clear();
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Latitude : {}", self.field(FieldId::Lat))?;
        writeln!(f, "Longitude: {}", self.field(FieldId::Lon))?;
        match &self.timezone {
            Some(tz) => writeln!(f, "Timezone : {}", tz.label)?,
            None => writeln!(f, "Timezone : -")?,
        }
        writeln!(f, "Moonrise : {}", self.field(FieldId::Rise))?;
        writeln!(f, "Moonset  : {}", self.field(FieldId::Set))?;
        if let Some(href) = &self.calendar_href {
            writeln!(f, "Calendar : {}", href)?;
        }
        if let Some(notice) = self.notice.current() {
            match (notice.role(), notice.aria_live()) {
                (Some(role), Some(live)) => {
                    writeln!(f, "Notice   : [{} {}] {}", role, live, notice)?
                }
                _ => writeln!(f, "Notice   : {}", notice)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone;

    #[test]
    fn unset_fields_read_empty() {
        let page = Page::default();
        assert_eq!(page.field(FieldId::Rise), "");
        assert_eq!(page.calendar_href(), None);
    }

    #[test]
    fn selecting_zone_mirrors_offset() {
        let mut page = Page::default();
        page.select_timezone(timezone::find_by_id("Asia/Kathmandu").unwrap());
        assert_eq!(page.field(FieldId::Zon), "5.75");
        assert!(page.to_string().contains("Timezone : (UTC+05:45) Kathmandu"));
    }

    #[test]
    fn render_lists_fields_and_notice() {
        let mut page = Page::default();
        page.set_field(FieldId::Lat, "-37.0000");
        page.set_field(FieldId::Rise, "6:15 AM");
        page.set_calendar_href("calendar?lat=-37.0000&lon=144.0000&zon=10");
        page.show_notice(Notice::Alert("Trouble".into()));
        let text = page.to_string();
        assert!(text.contains("Latitude : -37.0000"));
        assert!(text.contains("Moonrise : 6:15 AM"));
        assert!(text.contains("Calendar : calendar?lat=-37.0000"));
        assert!(text.contains("Notice   : [alert polite]"));
        assert!(text.contains("Trouble"));
    }

    #[test]
    fn status_renders_without_role() {
        let mut page = Page::default();
        page.show_notice(Notice::Status("Getting your location...".into()));
        let text = page.to_string();
        assert!(text.contains("Notice   : "));
        assert!(!text.contains("[alert"));
    }
}
