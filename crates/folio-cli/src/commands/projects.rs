use anyhow::{anyhow, Result};

use folio_core::content::projects;

/// Print the filtered project table to stdout, or a single project in full
/// when an id is given.
pub fn run(id: Option<&str>, tech: &str, category: &str) -> Result<()> {
    if let Some(id) = id {
        let project = projects::by_id(id)
            .ok_or_else(|| anyhow!("no project with id '{}'", id))?;
        println!("{} ({})", project.title, project.year);
        println!("{} · {} · {}", project.category, project.role, project.duration);
        println!();
        println!("{}", project.long_description);
        println!();
        println!("stack: {}", project.tech.join(", "));
        if let Some(url) = project.demo_url {
            println!("demo:  {}", url);
        }
        if let Some(url) = project.github_url {
            println!("repo:  {}", url);
        }
        if let Some(url) = project.blog_url {
            println!("blog:  {}", url);
        }
        return Ok(());
    }

    let matched = projects::filter(tech, category);
    if matched.is_empty() {
        println!("No projects match tech={} category={}", tech, category);
        return Ok(());
    }

    for project in matched {
        let star = if project.featured { "★" } else { " " };
        println!("{} {} ({})  [{}]", star, project.title, project.year, project.id);
        println!("    {}", project.description);
        println!("    {} · {} · {}", project.category, project.role, project.duration);
        println!("    stack: {}", project.tech.join(", "));
        if let Some(url) = project.github_url {
            println!("    {}", url);
        }
        println!();
    }

    Ok(())
}
