use leptos::prelude::*;

use crate::content::{
    AboutContent, AwardItem, ContactContent, Experience, HomeContent, Project, SkillCategory,
};

use super::nav::scroll_to_section;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect()
}

#[component]
pub fn HomeSection(data: HomeContent) -> impl IntoView {
    let monogram = initials(&data.name);
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative">
            <div class="text-center px-6">
                <div class="mb-8">
                    <div class="w-40 h-40 mx-auto rounded-3xl bg-gradient-to-br from-primary to-accent p-1">
                        <div class="w-full h-full rounded-3xl bg-muted/30 flex items-center justify-center text-6xl font-bold gradient-text">
                            {monogram}
                        </div>
                    </div>
                </div>
                <h1 class="text-5xl md:text-7xl font-bold mb-4 gradient-text">{data.name}</h1>
                <p class="text-xl md:text-2xl text-muted mb-12">{data.tagline}</p>
                <button
                    class="text-3xl text-muted hover:text-primary animate-bounce"
                    aria-label="Scroll to about section"
                    on:click=move |_| scroll_to_section("about")
                >
                    "⌄"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(data: AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="section-padding bg-muted/10">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">"About Me"</h2>
                <p class="text-xl text-muted mb-12">{data.one_liner}</p>

                <div class="grid md:grid-cols-2 gap-12 mb-16">
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{data.full_name}</h3>
                        <p class="text-muted leading-relaxed mb-6">{data.description}</p>
                        <div class="space-y-3 text-muted">
                            <div>"📧 " {data.email}</div>
                            <div>"📞 " {data.phone}</div>
                            <div>"📍 " {data.location}</div>
                        </div>
                    </div>
                    <div class="grid grid-cols-2 gap-6">
                        {data
                            .kpis
                            .into_iter()
                            .map(|kpi| {
                                view! {
                                    <div class="glass-card p-6 text-center rounded-lg">
                                        <div class="text-4xl font-bold gradient-text mb-2">
                                            {kpi.value}
                                        </div>
                                        <div class="text-sm text-muted">{kpi.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(data: Vec<Experience>) -> impl IntoView {
    view! {
        <section id="experience" class="section-padding">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">"Experience"</h2>
                <p class="text-xl text-muted mb-12">"My professional journey"</p>

                <div class="relative border-l-2 border-muted/30 ml-4 space-y-12">
                    {data
                        .into_iter()
                        .map(|exp| {
                            view! {
                                <div class="relative pl-8">
                                    <div class="absolute -left-[9px] top-1 w-4 h-4 rounded-full bg-primary"></div>
                                    <span class="text-sm text-muted">{exp.period}</span>
                                    <h3 class="text-2xl font-bold mt-1">{exp.role}</h3>
                                    <p class="text-primary mb-3">{exp.company}</p>
                                    <ul class="list-disc list-inside space-y-1 text-muted">
                                        {exp
                                            .responsibilities
                                            .into_iter()
                                            .map(|r| view! { <li>{r}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(data: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id="skills" class="section-padding bg-muted/10">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">"Skills"</h2>
                <p class="text-xl text-muted mb-12">"Technologies I work with"</p>

                <div class="grid md:grid-cols-3 gap-8">
                    {data
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="glass-card p-6 rounded-lg">
                                    <h3 class="text-xl font-bold mb-6">{category.category}</h3>
                                    <div class="space-y-4">
                                        {category
                                            .items
                                            .into_iter()
                                            .map(|skill| {
                                                let width = format!("width: {}%", skill.level.min(100));
                                                view! {
                                                    <div>
                                                        <div class="flex justify-between text-sm mb-1">
                                                            <span>{skill.name}</span>
                                                            <span class="text-muted">
                                                                {skill.level.to_string()} "%"
                                                            </span>
                                                        </div>
                                                        <div class="h-2 rounded-full bg-muted/30">
                                                            <div
                                                                class="h-2 rounded-full bg-gradient-to-r from-primary to-accent"
                                                                style=width
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(data: Vec<Project>) -> impl IntoView {
    let (selected, set_selected) = signal(None::<Project>);

    view! {
        <section id="projects" class="section-padding">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">"Projects"</h2>
                <p class="text-xl text-muted mb-12">"Showcase of my recent work"</p>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {data
                        .into_iter()
                        .map(|project| {
                            let card = project.clone();
                            view! {
                                <button
                                    class="glass-card p-6 rounded-lg text-left hover:shadow-xl transition-shadow"
                                    on:click=move |_| set_selected(Some(card.clone()))
                                >
                                    <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                                    <p class="text-sm text-muted mb-4">{project.description}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {project
                                            .tech_stack
                                            .into_iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="text-xs px-2 py-1 rounded-full bg-primary/10 text-primary">
                                                        {tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected()
                    .map(|project| {
                        view! { <ProjectModal project on_close=move || set_selected(None) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectModal(project: Project, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-6">
            <div class="glass-card max-w-2xl w-full rounded-lg p-8 max-h-[80vh] overflow-y-auto">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-3xl font-bold gradient-text">{project.title}</h3>
                    <button
                        class="text-2xl text-muted hover:text-foreground"
                        aria-label="Close project details"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>
                <p class="text-muted mb-4">{project.description}</p>
                <h4 class="font-bold mb-1">"My contribution"</h4>
                <p class="text-muted mb-4">{project.contribution}</p>
                <h4 class="font-bold mb-1">"Results"</h4>
                <p class="text-muted mb-4">{project.results}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-full bg-accent/10 text-accent">
                                    "#" {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {project
                        .links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-primary hover:underline"
                                >
                                    {link.kind}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn award_icon(category: &str) -> &'static str {
    match category {
        "certification" => "📜",
        "award" => "🏆",
        "training" => "📚",
        _ => "⭐",
    }
}

#[component]
pub fn AwardsSection(data: Vec<AwardItem>) -> impl IntoView {
    view! {
        <section id="awards" class="section-padding bg-muted/10">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">
                    "Awards & Certifications"
                </h2>
                <p class="text-xl text-muted mb-12">
                    "Recognitions, certifications, and trainings"
                </p>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {data
                        .into_iter()
                        .map(|award| {
                            let icon = award_icon(&award.category);
                            view! {
                                <div class="glass-card p-6 rounded-lg">
                                    <div class="text-3xl mb-3">{icon}</div>
                                    <h3 class="text-lg font-bold mb-1">{award.title}</h3>
                                    <p class="text-sm text-primary mb-1">{award.institution}</p>
                                    <p class="text-xs text-muted mb-3">{award.period}</p>
                                    <p class="text-sm text-muted">{award.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection(data: ContactContent) -> impl IntoView {
    let mailto = format!("mailto:{}", data.email);
    view! {
        <section id="contact" class="section-padding">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-4 gradient-text">"Get In Touch"</h2>
                <p class="text-xl text-muted mb-12">
                    "Open to collaboration and interesting conversations"
                </p>

                <div class="glass-card p-8 rounded-lg">
                    <div class="space-y-3 text-muted mb-8">
                        <div>"📧 " <a href=mailto class="text-primary hover:underline">{data.email}</a></div>
                        <div>"📞 " {data.phone}</div>
                        <div>"📍 " {data.location}</div>
                        <div>"💬 KakaoTalk: " {data.kakao_talk}</div>
                    </div>
                    <div class="flex justify-center gap-6">
                        <a
                            href=data.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-primary hover:underline"
                        >
                            "GitHub"
                        </a>
                        <a
                            href=data.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-primary hover:underline"
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href=data.website
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-primary hover:underline"
                        >
                            "Website"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
