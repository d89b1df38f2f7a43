use leptos::prelude::*;

use crate::content::{PROJECTS_HEADING, PROJECTS_INTRO};
use crate::types::ProjectCard;

/// Projects showcase. Anchor target of both hero actions.
#[component]
pub fn Projects(
    /// Cards in display order
    projects: Vec<ProjectCard>,
) -> impl IntoView {
    view! {
        <section id="projects" class="section section-muted">
            <div class="container">
                <h2 class="section-title">{PROJECTS_HEADING}</h2>
                <p class="section-intro">{PROJECTS_INTRO}</p>
                <div class="project-grid">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCardView project=project /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCardView(project: ProjectCard) -> impl IntoView {
    let key = project.name.clone();
    let badge_class = project.status.badge_class();
    let status = project.status.label();
    let tags = project
        .tags
        .into_iter()
        .map(|tag| {
            let tag_key = format!("{}-{}", project.name, tag);
            view! { <span class="tag-chip" data-key=tag_key>{tag}</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="project-card" data-key=key>
            <div class="project-head">
                <h3 class="card-title">{project.name}</h3>
                <span class=badge_class>{status}</span>
            </div>
            <p class="card-text">{project.description}</p>
            <div class="tag-list">{tags}</div>
        </article>
    }
}
