#![allow(dead_code)]

use bookshelf_core::{BookId, Clock, IdGenerator, NewBook};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Yields `book-0001`, `book-0002`, ... in order.
#[derive(Default)]
pub struct SequenceIds {
    next: Cell<u32>,
}

impl IdGenerator for SequenceIds {
    fn generate(&self) -> BookId {
        let value = self.next.get() + 1;
        self.next.set(value);
        BookId::new(format!("book-{value:04}"))
    }
}

/// Replays a fixed script of ids, then repeats the last one.
pub struct ScriptedIds {
    script: RefCell<VecDeque<&'static str>>,
    last: Cell<&'static str>,
}

impl ScriptedIds {
    pub fn new(script: &[&'static str]) -> Self {
        Self {
            script: RefCell::new(script.iter().copied().collect()),
            last: Cell::new(script.last().copied().unwrap_or("fixed")),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn generate(&self) -> BookId {
        let next = self.script.borrow_mut().pop_front();
        BookId::from(next.unwrap_or_else(|| self.last.get()))
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + Duration::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

pub fn new_book(name: &str, page_count: u32, read_page: u32, reading: bool) -> NewBook {
    NewBook {
        name: Some(name.to_string()),
        year: 2020,
        author: "A".to_string(),
        summary: "S".to_string(),
        publisher: "P".to_string(),
        page_count,
        read_page,
        reading,
    }
}
