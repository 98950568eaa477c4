use super::{to_json, CommandContext, CommandHandler};
use crate::catalog::{dates, Certification, PersonalInfo, Portfolio, Publication};
use crate::format::truncate_text;
use crate::Result;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

const TITLE_WIDTH: usize = 48;

/// Handler for the `about` command
pub struct AboutCommand;

/// Headline numbers on the about page
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AboutStats {
    pub projects: usize,
    pub publications: usize,
    pub certifications: usize,
    pub experience: usize,
}

impl AboutStats {
    pub fn of(portfolio: &Portfolio) -> Self {
        Self {
            projects: portfolio.projects.len(),
            publications: portfolio.publications.len(),
            certifications: portfolio.certifications.len(),
            experience: portfolio.experience.len(),
        }
    }
}

#[derive(Serialize)]
struct AboutView<'a> {
    personal: Option<&'a PersonalInfo>,
    stats: AboutStats,
    publications: Vec<&'a Publication>,
    certifications: Vec<&'a Certification>,
}

#[derive(Tabled)]
struct PublicationRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Venue")]
    venue: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&Publication> for PublicationRow {
    fn from(publication: &Publication) -> Self {
        Self {
            title: truncate_text(&publication.title, TITLE_WIDTH),
            venue: format!("{}, {}", publication.venue, publication.year),
            status: publication.status.as_str().to_string(),
            tags: publication
                .tags
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Tabled)]
struct CertificationRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Issuer")]
    issuer: String,
    #[tabled(rename = "Issued")]
    issued: String,
    #[tabled(rename = "Skills")]
    skills: String,
}

impl From<&Certification> for CertificationRow {
    fn from(cert: &Certification) -> Self {
        let mut issued = dates::format_date(&cert.date);
        if let Some(expiry) = &cert.expiry_date {
            issued.push_str(&format!(" (expires {})", dates::format_date(expiry)));
        }
        Self {
            name: cert.name.clone(),
            issuer: cert.issuer.clone(),
            issued,
            skills: cert.skills.join(", "),
        }
    }
}

fn table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

impl CommandHandler for AboutCommand {
    fn render(&self, ctx: &CommandContext) -> Result<String> {
        let portfolio = &ctx.portfolio;
        let view = AboutView {
            personal: portfolio.personal.as_ref(),
            stats: AboutStats::of(portfolio),
            publications: portfolio.sorted_publications(),
            certifications: portfolio.sorted_certifications(),
        };

        if ctx.is_json() {
            return to_json(&view);
        }

        let mut sections = Vec::new();
        if let Some(personal) = view.personal {
            sections.push(profile(personal));
        }

        let stats = &view.stats;
        sections.push(format!(
            "{} projects | {} publications | {} certifications | {} roles",
            stats.projects, stats.publications, stats.certifications, stats.experience
        ));

        if !view.publications.is_empty() {
            let rows: Vec<PublicationRow> =
                view.publications.iter().map(|p| PublicationRow::from(*p)).collect();
            sections.push(format!("Publications\n{}", table(&rows)));
        }
        if !view.certifications.is_empty() {
            let rows: Vec<CertificationRow> = view
                .certifications
                .iter()
                .map(|c| CertificationRow::from(*c))
                .collect();
            sections.push(format!("Certifications\n{}", table(&rows)));
        }

        Ok(sections.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "about"
    }
}

fn profile(personal: &PersonalInfo) -> String {
    let mut lines = vec![
        personal.name.clone(),
        format!("{} | {}", personal.title, personal.location),
        String::new(),
        personal.bio.clone(),
        String::new(),
        format!("Email     {}", personal.email),
    ];
    if !personal.interests.is_empty() {
        lines.push(format!("Interests {}", personal.interests.join(", ")));
    }

    let social = &personal.social;
    for (label, url) in [
        ("GitHub", &social.github),
        ("LinkedIn", &social.linkedin),
        ("Twitter", &social.twitter),
        ("Scholar", &social.scholar),
    ] {
        if let Some(url) = url {
            lines.push(format!("{:<9} {}", label, url));
        }
    }
    if let Some(resume) = &personal.resume {
        lines.push(format!("Resume    {}", resume));
    }
    lines.join("\n")
}
