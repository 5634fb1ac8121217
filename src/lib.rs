pub mod configuration;
pub mod configurationerror;

pub mod clock {
    pub mod clock;
    pub mod civiltime;
    pub mod timesync;
}

pub mod format {
    pub mod dateformatter;
    pub mod message;
    pub mod report;
}

pub mod holiday {
    pub mod easter;
    pub mod holiday;
    pub mod recurringholiday;
    pub mod fixeddateholiday;
    pub mod easterrelatedholiday;
    pub mod nationalcalendar;
    pub mod nextholiday;
}

pub mod theme {
    pub mod theme;
}
