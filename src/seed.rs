use serde::Serialize;

use crate::auth::{generate_reset_token, hash_password, AuthError};
use crate::config::AdminBootstrap;
use crate::content::{self, ModuleSeed, QuestionSeed};
use crate::db::operations::content as content_ops;
use crate::db::operations::content::{NewModule, NewQuestion, QuestionBank};
use crate::db::operations::user as user_ops;
use crate::db::operations::user::NewUser;
use crate::db::DatabaseProxy;

#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub modules_created: usize,
    pub lessons_created: usize,
    pub topics_created: usize,
    pub references_created: usize,
    pub questions_created: usize,
    pub final_questions_created: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.modules_created == 0
            && self.lessons_created == 0
            && self.references_created == 0
            && self.questions_created == 0
            && self.final_questions_created == 0
    }
}

/// Copies the embedded content into the database. Safe to run on every
/// start: each table is only filled where it is still empty.
pub async fn seed_content(proxy: &DatabaseProxy) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    for seed in content::MODULES {
        let module_id = match content_ops::find_module_by_order(proxy, seed.order).await? {
            Some(existing) => existing.id,
            None => {
                report.modules_created += 1;
                content_ops::insert_module(proxy, &new_module(seed)).await?
            }
        };

        if content_ops::count_lessons(proxy, module_id).await? == 0 {
            for (lesson_idx, lesson) in seed.lessons.iter().enumerate() {
                let lesson_id =
                    content_ops::insert_lesson(proxy, module_id, lesson.title, lesson_idx as i64 + 1)
                        .await?;
                report.lessons_created += 1;
                for (topic_idx, topic) in lesson.topics.iter().enumerate() {
                    content_ops::insert_topic(
                        proxy,
                        lesson_id,
                        topic.title,
                        topic.body,
                        topic_idx as i64 + 1,
                    )
                    .await?;
                    report.topics_created += 1;
                }
            }
        }

        if content_ops::count_references(proxy, module_id).await? == 0 {
            for (idx, reference) in seed.references.iter().enumerate() {
                content_ops::insert_reference(
                    proxy,
                    module_id,
                    reference.label,
                    reference.url,
                    idx as i64 + 1,
                )
                .await?;
                report.references_created += 1;
            }
        }

        if content_ops::count_module_questions(proxy, module_id).await? == 0 {
            for question in seed.questions {
                content_ops::insert_question(
                    proxy,
                    QuestionBank::KnowledgeCheck,
                    &new_question(Some(module_id), question),
                )
                .await?;
                report.questions_created += 1;
            }
        }
    }

    if content_ops::count_questions(proxy, QuestionBank::FinalAssessment).await? == 0 {
        for question in content::final_assessment_questions() {
            content_ops::insert_question(
                proxy,
                QuestionBank::FinalAssessment,
                &new_question(None, question),
            )
            .await?;
            report.final_questions_created += 1;
        }
    }

    if report.is_empty() {
        tracing::debug!("content already seeded");
    } else {
        tracing::info!(
            modules = report.modules_created,
            lessons = report.lessons_created,
            questions = report.questions_created,
            final_questions = report.final_questions_created,
            "seeded course content"
        );
    }

    Ok(report)
}

#[derive(Debug, thiserror::Error)]
pub enum AdminSeedError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Creates the bootstrap administrator unless a user with that username
/// already exists. Returns the new user id when one was created.
pub async fn ensure_admin(
    proxy: &DatabaseProxy,
    admin: &AdminBootstrap,
    bcrypt_cost: u32,
) -> Result<Option<i64>, AdminSeedError> {
    if user_ops::username_exists(proxy, &admin.username).await? {
        tracing::debug!(username = %admin.username, "admin account already present");
        return Ok(None);
    }

    let password = match &admin.password {
        Some(password) => password.clone(),
        None => {
            let generated = generate_reset_token();
            tracing::warn!(
                username = %admin.username,
                password = %generated,
                "ADMIN_PASSWORD not set, generated a one-off admin password"
            );
            generated
        }
    };

    let user = NewUser {
        username: admin.username.clone(),
        email: admin.email.clone(),
        password_hash: hash_password(&password, bcrypt_cost)?,
        full_name: "System Administrator".to_string(),
        specialization: "Administration".to_string(),
        year_level: "N/A".to_string(),
        birthday: None,
        address: None,
        is_admin: true,
    };

    let id = user_ops::insert_user(proxy, &user).await?;
    tracing::info!(user_id = id, username = %admin.username, "created admin account");
    Ok(Some(id))
}

fn new_module(seed: &ModuleSeed) -> NewModule {
    NewModule {
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        content: seed.content.to_string(),
        display_order: seed.order,
        estimated_minutes: seed.estimated_minutes,
        has_simulation: seed.simulation.is_some(),
        simulation_type: seed.simulation.map(|kind| kind.as_str().to_string()),
    }
}

fn new_question(module_id: Option<i64>, seed: &QuestionSeed) -> NewQuestion {
    NewQuestion {
        module_id,
        question_text: seed.text.to_string(),
        options: seed.options.map(str::to_string),
        correct_answer: seed.correct_answer(),
        explanation: seed.explanation.to_string(),
        question_set: i64::from(seed.set),
    }
}
