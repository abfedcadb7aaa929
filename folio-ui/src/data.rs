//! Bundled course catalog.
//!
//! The showcase content ships with the binary; it is converted and validated
//! once at mount.

use folio_core::{Catalog, CatalogItem, CategoryList, Result};

/// Category enumeration, wildcard first.
pub static CATEGORIES: &[&str] = &[
    "All",
    "Frontend",
    "Backend",
    "Full Stack",
    "Mobile",
    "Tools",
    "Marketing",
    "Best Practices",
    "Finance",
];

/// One course entry as written in the source table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogRecord {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: Option<&'static str>,
    pub credential_url: Option<&'static str>,
    pub categories: &'static [&'static str],
}

impl CatalogRecord {
    fn to_item(self) -> CatalogItem {
        let mut item = CatalogItem::new(self.title, self.issuer, self.date)
            .with_categories(self.categories.iter().copied());
        if let Some(id) = self.credential_id {
            item = item.with_credential_id(id);
        }
        if let Some(url) = self.credential_url {
            item = item.with_external_url(url);
        }
        item
    }
}

/// Courses in display order.
pub static COURSES: &[CatalogRecord] = &[
    CatalogRecord {
        title: "100 Days of SwiftUI",
        issuer: "Hacking with Swift",
        date: "May 2025",
        credential_id: None,
        credential_url: Some("https://www.hackingwithswift.com/100/swiftui"),
        categories: &["Mobile"],
    },
    CatalogRecord {
        title: "Next.js & React - The Complete Guide (incl. Two Paths!)",
        issuer: "Udemy",
        date: "Sep 2023",
        credential_id: Some("UC-152bbf2c-6422-4dd2-b4e7-f184a4a4be6c"),
        credential_url: Some("https://www.udemy.com/certificate/UC-152bbf2c-6422-4dd2-b4e7-f184a4a4be6c/"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "Clean Code",
        issuer: "Udemy",
        date: "May 2023",
        credential_id: Some("UC-ef9ea775-ebed-43a1-876a-7ba2b7ab323f"),
        credential_url: Some("https://www.udemy.com/certificate/UC-ef9ea775-ebed-43a1-876a-7ba2b7ab323f/"),
        categories: &["Best Practices"],
    },
    CatalogRecord {
        title: "The Git & Github Bootcamp",
        issuer: "Udemy",
        date: "Apr 2023",
        credential_id: Some("UC-adf780d9-2417-482d-8484-d9a51d7a14af"),
        credential_url: Some("https://www.udemy.com/certificate/UC-adf780d9-2417-482d-8484-d9a51d7a14af/"),
        categories: &["Tools"],
    },
    CatalogRecord {
        title: "Angular Universal In Depth (Angular 15)",
        issuer: "Udemy",
        date: "Mar 2023",
        credential_id: Some("UC-132bac29-f228-4149-9d0a-217318d00ea6"),
        credential_url: Some("https://www.udemy.com/certificate/UC-132bac29-f228-4149-9d0a-217318d00ea6/"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "Understanding TypeScript - 2022 Edition",
        issuer: "Udemy",
        date: "May 2022",
        credential_id: Some("UC-efca56e7-c45a-494b-afad-2b7e5b466ca1"),
        credential_url: Some("https://www.udemy.com/certificate/UC-efca56e7-c45a-494b-afad-2b7e5b466ca1/"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "Angular & NodeJS - The MEAN Stack Guide [2022 Edition]",
        issuer: "Udemy",
        date: "Apr 2022",
        credential_id: Some("UC-e33c9974-a5f9-49bb-9193-6dd91c3ec561"),
        credential_url: Some("https://www.udemy.com/certificate/UC-e33c9974-a5f9-49bb-9193-6dd91c3ec561/"),
        categories: &["Full Stack"],
    },
    CatalogRecord {
        title: "LinkedIn Ads: LinkedIn Lead Generation | LinkedIn Marketing",
        issuer: "Udemy",
        date: "Apr 2022",
        credential_id: Some("UC-bc71345c-ad1c-4ee6-bfef-4c31f8dad24f"),
        credential_url: Some("https://www.udemy.com/certificate/UC-bc71345c-ad1c-4ee6-bfef-4c31f8dad24f/"),
        categories: &["Marketing"],
    },
    CatalogRecord {
        title: "The Web Developer Bootcamp 2022",
        issuer: "Udemy",
        date: "Apr 2022",
        credential_id: Some("UC-8a4b17b8-c7cc-4d6b-983c-13b89490c88c"),
        credential_url: Some("https://www.udemy.com/certificate/UC-8a4b17b8-c7cc-4d6b-983c-13b89490c88c/"),
        categories: &["Full Stack"],
    },
    CatalogRecord {
        title: "Learning Docker",
        issuer: "LinkedIn",
        date: "Jun 2018",
        credential_id: None,
        credential_url: Some("https://www.linkedin.com/learning/certificates/f5361725d07fd24b2800bfd134c5c9e8a7866126d5d8bd0bd069aca6f84b023f"),
        categories: &["Tools"],
    },
    CatalogRecord {
        title: "Multiplatform Mobile App Development with Web Technologies",
        issuer: "Coursera",
        date: "Dec 2016",
        credential_id: Some("JM6RMVXZMCQH"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/verify/JM6RMVXZMCQH"),
        categories: &["Full Stack", "Mobile"],
    },
    CatalogRecord {
        title: "Server-side Development with NodeJS",
        issuer: "Coursera",
        date: "Nov 2016",
        credential_id: Some("M3YVH28Q3TJW"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/verify/M3YVH28Q3TJW"),
        categories: &["Backend"],
    },
    CatalogRecord {
        title: "Front-End JavaScript Frameworks: AngularJS",
        issuer: "Coursera",
        date: "Oct 2016",
        credential_id: Some("HSU2YSV8WZYZ"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/verify/HSU2YSV8WZYZ"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "Front-End Web UI Frameworks and Tools",
        issuer: "Coursera",
        date: "Sep 2016",
        credential_id: Some("NP7T8T4Z7XG3"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/verify/NP7T8T4Z7XG3"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "HTML, CSS and JavaScript",
        issuer: "Coursera",
        date: "Sep 2016",
        credential_id: Some("HAC3JHKYGW57"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/verify/HAC3JHKYGW57"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "Responsive Website Basics: Code with HTML, CSS, and JavaScript",
        issuer: "Coursera",
        date: "Aug 2016",
        credential_id: Some("2S9J7RMBL7WR"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/verify/2S9J7RMBL7WR"),
        categories: &["Frontend"],
    },
    CatalogRecord {
        title: "An Introduction to Interactive Programming in Python",
        issuer: "Coursera",
        date: "Nov 2014",
        credential_id: None,
        credential_url: Some("https://www.coursera.org/learn/interactive-python-1"),
        categories: &["Backend"],
    },
    CatalogRecord {
        title: "Programming for Everybody (Python)",
        issuer: "Coursera",
        date: "Sep 2014",
        credential_id: Some("6P4HZ46P8W"),
        credential_url: Some("https://www.coursera.org/account/accomplishments/certificate/6P4HZ46P8W"),
        categories: &["Backend"],
    },
    CatalogRecord {
        title: "Intro to Salesforce App Development",
        issuer: "Udacity",
        date: "Mar 2014",
        credential_id: None,
        credential_url: None,
        categories: &["Tools"],
    },
    CatalogRecord {
        title: "Canadian Securities Course (Honours)",
        issuer: "Canadian Securities Institute",
        date: "May 2011",
        credential_id: None,
        credential_url: Some("https://www.csi.ca/en/learning/courses/csc"),
        categories: &["Finance"],
    },
    CatalogRecord {
        title: "Google Analytics Essential Training",
        issuer: "Lynda.com",
        date: "Jul 2016",
        credential_id: Some("E3168C"),
        credential_url: None,
        categories: &["Marketing"],
    },
    CatalogRecord {
        title: "Up and Running with Python and Django",
        issuer: "Lynda.com",
        date: "Jul 2016",
        credential_id: Some("C5F316"),
        credential_url: None,
        categories: &["Backend"],
    },
];

/// Build the validated course catalog.
///
/// Items with unknown categories are repaired and logged by the loader; only
/// an invalid category list is an error.
pub fn load_course_catalog() -> Result<Catalog> {
    let categories = CategoryList::new(CATEGORIES)?;
    let load = Catalog::load(COURSES.iter().map(|r| r.to_item()).collect(), categories);
    if load.issues.is_empty() {
        log::debug!("Loaded {} catalog items", load.catalog.len());
    }
    Ok(load.catalog)
}
