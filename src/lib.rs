pub mod time {
    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod calendarerror;
        pub mod holidayset;
        pub mod holidaycalendar;
        pub mod polishcalendar;
    }
}
