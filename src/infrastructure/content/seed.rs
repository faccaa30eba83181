// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Built-in content fixtures.
//!
//! These are the hand-authored collections the site ships with; any of
//! them can be overridden per collection through the content directory.

use chrono::NaiveDate;

use crate::domain::models::careers::CareerOpening;
use crate::domain::models::education::EducationPath;
use crate::domain::models::events::CampusEvent;
use crate::domain::models::news::NewsArticle;
use crate::domain::models::schools::School;
use crate::domain::models::sections::{ContentSection, SectionKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn news() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 1,
            title: "New Law Program Announced".to_string(),
            excerpt: "The School of Law launches an LLM in Technology and Innovation Law."
                .to_string(),
            category: "Academics".to_string(),
            published_at: date(2026, 2, 10),
        },
        NewsArticle {
            id: 2,
            title: "Graduation Ceremony Dates Confirmed".to_string(),
            excerpt: "The 2026 commencement will be held at the main auditorium.".to_string(),
            category: "Campus".to_string(),
            published_at: date(2026, 1, 22),
        },
        NewsArticle {
            id: 3,
            title: "Research Grant Awarded to Computing Faculty".to_string(),
            excerpt: "A regional grant funds work on affordable rural connectivity.".to_string(),
            category: "Research".to_string(),
            published_at: date(2026, 3, 2),
        },
        NewsArticle {
            id: 4,
            title: "University Partners with County Hospitals".to_string(),
            excerpt: "New clinical placements for health sciences students.".to_string(),
            category: "Partnerships".to_string(),
            published_at: date(2025, 11, 18),
        },
        NewsArticle {
            id: 5,
            title: "Basketball Team Wins National League".to_string(),
            excerpt: "The Falcons take the title for the second year running.".to_string(),
            category: "Sports".to_string(),
            published_at: date(2025, 10, 5),
        },
    ]
}

pub fn events() -> Vec<CampusEvent> {
    vec![
        CampusEvent {
            id: 1,
            title: "Open Day".to_string(),
            kind: "Admissions".to_string(),
            date: "March 14, 2026".to_string(),
            time: "9:00 AM".to_string(),
            location: "Mombasa Road Campus".to_string(),
        },
        CampusEvent {
            id: 2,
            title: "Public Lecture: The Future of Fintech".to_string(),
            kind: "Lecture".to_string(),
            date: "April 2, 2026".to_string(),
            time: "5:30 PM".to_string(),
            location: "Auditorium B".to_string(),
        },
        CampusEvent {
            id: 3,
            title: "Graduation Ceremony".to_string(),
            kind: "Ceremony".to_string(),
            date: "June 26, 2026".to_string(),
            time: "10:00 AM".to_string(),
            location: "Main Auditorium".to_string(),
        },
        CampusEvent {
            id: 4,
            title: "Inter-University Sports Gala".to_string(),
            kind: "Sports".to_string(),
            date: "May 9, 2026".to_string(),
            time: "8:00 AM".to_string(),
            location: "Sports Complex".to_string(),
        },
    ]
}

pub fn careers() -> Vec<CareerOpening> {
    vec![
        CareerOpening {
            id: 1,
            title: "Lecturer, Computer Science".to_string(),
            kind: "Full Time".to_string(),
            date: "February 28, 2026".to_string(),
            time: "5:00 PM".to_string(),
        },
        CareerOpening {
            id: 2,
            title: "Admissions Officer".to_string(),
            kind: "Full Time".to_string(),
            date: "March 15, 2026".to_string(),
            time: "5:00 PM".to_string(),
        },
        CareerOpening {
            id: 3,
            title: "Adjunct Faculty, School of Business".to_string(),
            kind: "Part Time".to_string(),
            date: "Rolling".to_string(),
            time: "Anytime".to_string(),
        },
    ]
}

pub fn education_paths() -> Vec<EducationPath> {
    vec![
        EducationPath {
            id: 1,
            title: "Undergraduate Degrees".to_string(),
            description:
                "Bachelor programmes across business, computing, education and international relations."
                    .to_string(),
        },
        EducationPath {
            id: 2,
            title: "Postgraduate Degrees".to_string(),
            description: "Masters programmes and doctoral studies.".to_string(),
        },
        EducationPath {
            id: 3,
            title: "Professional Certificates".to_string(),
            description: "Short industry-aligned courses for working professionals.".to_string(),
        },
        EducationPath {
            id: 4,
            title: "Foundation Programmes".to_string(),
            description: "Bridging courses preparing students for degree study.".to_string(),
        },
    ]
}

pub fn schools() -> Vec<School> {
    vec![
        School {
            id: 1,
            name: "Riara Law School".to_string(),
        },
        School {
            id: 2,
            name: "School of Business".to_string(),
        },
        School {
            id: 3,
            name: "School of Computing Sciences".to_string(),
        },
        School {
            id: 4,
            name: "School of Education".to_string(),
        },
        School {
            id: 5,
            name: "School of International Relations and Diplomacy".to_string(),
        },
    ]
}

pub fn sections() -> Vec<ContentSection> {
    vec![
        ContentSection {
            id: 1,
            kind: SectionKind::CampusLife,
            title: "Clubs and Societies".to_string(),
            description: "From debate to robotics, more than thirty student groups.".to_string(),
        },
        ContentSection {
            id: 2,
            kind: SectionKind::CampusLife,
            title: "Student Housing".to_string(),
            description: "On-campus hostels and accredited private housing.".to_string(),
        },
        ContentSection {
            id: 3,
            kind: SectionKind::Arts,
            title: "Music and Theatre".to_string(),
            description: "Ensembles, stage productions and open mic nights.".to_string(),
        },
        ContentSection {
            id: 4,
            kind: SectionKind::Arts,
            title: "Visual Arts Studio".to_string(),
            description: "Painting, photography and digital design spaces.".to_string(),
        },
        ContentSection {
            id: 5,
            kind: SectionKind::Healthcare,
            title: "Student Clinic".to_string(),
            description: "Walk-in clinic with general practice and first aid.".to_string(),
        },
        ContentSection {
            id: 6,
            kind: SectionKind::Healthcare,
            title: "Counselling Services".to_string(),
            description: "Confidential support for students and staff.".to_string(),
        },
        ContentSection {
            id: 7,
            kind: SectionKind::Athletics,
            title: "Basketball".to_string(),
            description: "Men's and women's teams competing in the national league.".to_string(),
        },
        ContentSection {
            id: 8,
            kind: SectionKind::Athletics,
            title: "Swimming".to_string(),
            description: "Heated pool with morning and evening lanes.".to_string(),
        },
    ]
}
