//! Sample postings and applications used to populate an empty development store.

use tracing::info;

use super::domain::{NewApplication, NewJobPosting};
use super::service::{BoardError, JobBoardService};
use super::store::{ApplicationStore, JobStore};
use super::JobFilter;

fn posting(
    title: &str,
    company: &str,
    description: &str,
    category: &str,
    location: &str,
    salary_range: &str,
) -> NewJobPosting {
    NewJobPosting {
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        salary_range: salary_range.to_string(),
    }
}

pub fn sample_postings() -> Vec<NewJobPosting> {
    vec![
        posting(
            "Frontend Developer",
            "TechCorp",
            "We're looking for a skilled Frontend Developer to join our team and help build responsive web applications using React, TypeScript, and modern CSS frameworks.",
            "Development",
            "Remote",
            "$80,000 - $120,000",
        ),
        posting(
            "UX Designer",
            "DesignHub",
            "Join our creative team as a UX Designer to craft beautiful, intuitive user experiences for web and mobile applications.",
            "Design",
            "New York, NY",
            "$90,000 - $130,000",
        ),
        posting(
            "DevOps Engineer",
            "CloudScale",
            "We're seeking an experienced DevOps Engineer to maintain our cloud infrastructure and CI/CD pipelines.",
            "Operations",
            "San Francisco, CA",
            "$110,000 - $150,000",
        ),
        posting(
            "Data Scientist",
            "DataInsight",
            "Join our data team to build machine learning models and generate insights from large datasets.",
            "Data Science",
            "Boston, MA",
            "$100,000 - $140,000",
        ),
        posting(
            "Backend Developer",
            "ServerLogic",
            "Build robust APIs and microservices using Node.js, PostgreSQL, and Docker.",
            "Development",
            "Remote",
            "$85,000 - $125,000",
        ),
        posting(
            "Product Manager",
            "ProductFlow",
            "Lead product development from ideation to market release, working with cross-functional teams.",
            "Management",
            "Chicago, IL",
            "$95,000 - $135,000",
        ),
    ]
}

/// Sample applications paired with the index of the sample posting they target.
pub fn sample_applications() -> Vec<(usize, NewApplication)> {
    let application = |name: &str, email: &str, resume: &str, cover_letter: &str| NewApplication {
        job_id: super::JobId(String::new()),
        name: name.to_string(),
        email: email.to_string(),
        resume_link: resume.to_string(),
        cover_letter: cover_letter.to_string(),
    };

    vec![
        (
            0,
            application(
                "Alex Johnson",
                "alex.johnson@example.com",
                "https://example.com/alex-resume.pdf",
                "I'm excited about the Frontend Developer position at TechCorp. With 5 years of experience in React and TypeScript...",
            ),
        ),
        (
            0,
            application(
                "Jamie Smith",
                "jamie.smith@example.com",
                "https://example.com/jamie-resume.pdf",
                "As a passionate frontend developer with expertise in building responsive interfaces...",
            ),
        ),
        (
            1,
            application(
                "Taylor Wilson",
                "taylor.wilson@example.com",
                "https://example.com/taylor-resume.pdf",
                "I've been working as a UX Designer for over 3 years and am very interested in joining DesignHub...",
            ),
        ),
    ]
}

/// Load the sample dataset through the service when the store holds no postings.
/// Returns the number of postings created.
pub fn seed_if_empty<J, A>(service: &JobBoardService<J, A>) -> Result<usize, BoardError>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    if !service.list(&JobFilter::default())?.is_empty() {
        return Ok(0);
    }

    let mut created = Vec::new();
    for posting in sample_postings() {
        created.push(service.create(posting)?);
    }

    for (index, mut application) in sample_applications() {
        if let Some(posting) = created.get(index) {
            application.job_id = posting.id.clone();
            service.submit_application(application)?;
        }
    }

    info!(postings = created.len(), "seeded sample job board data");
    Ok(created.len())
}
