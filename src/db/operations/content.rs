use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite};

use crate::db::DatabaseProxy;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub content: String,
    pub display_order: i64,
    pub estimated_minutes: i64,
    pub has_simulation: bool,
    pub simulation_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub display_order: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    pub id: i64,
    pub lesson_id: i64,
    pub title: String,
    pub body: String,
    pub display_order: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    pub id: i64,
    pub module_id: i64,
    pub label: String,
    pub url: String,
    pub display_order: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: i64,
    pub module_id: Option<i64>,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub explanation: String,
    pub question_set: i64,
}

impl QuestionRecord {
    pub fn option_text(&self, option: &str) -> Option<&str> {
        match option {
            "a" => Some(&self.option_a),
            "b" => Some(&self.option_b),
            "c" => Some(&self.option_c),
            "d" => Some(&self.option_d),
            _ => None,
        }
    }
}

/// Which question table a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionBank {
    KnowledgeCheck,
    FinalAssessment,
}

impl QuestionBank {
    fn select(self) -> &'static str {
        match self {
            QuestionBank::KnowledgeCheck => {
                r#"SELECT "id", "module_id", "question_text", "option_a", "option_b", "option_c",
                   "option_d", "correct_answer", "explanation", "question_set"
                   FROM "knowledge_check_questions""#
            }
            QuestionBank::FinalAssessment => {
                r#"SELECT "id", NULL AS "module_id", "question_text", "option_a", "option_b",
                   "option_c", "option_d", "correct_answer", "explanation", "question_set"
                   FROM "final_assessment_questions""#
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewModule {
    pub name: String,
    pub description: String,
    pub content: String,
    pub display_order: i64,
    pub estimated_minutes: i64,
    pub has_simulation: bool,
    pub simulation_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ModuleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub has_simulation: Option<bool>,
    pub simulation_type: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub module_id: Option<i64>,
    pub question_text: String,
    pub options: [String; 4],
    pub correct_answer: String,
    pub explanation: String,
    pub question_set: i64,
}

const MODULE_COLUMNS: &str = r#"
    "id", "name", "description", "content", "display_order", "estimated_minutes",
    "has_simulation", "simulation_type", "created_at", "updated_at"
"#;

pub async fn list_modules(proxy: &DatabaseProxy) -> Result<Vec<ModuleRecord>, sqlx::Error> {
    sqlx::query_as::<_, ModuleRecord>(&format!(
        r#"SELECT {MODULE_COLUMNS} FROM "modules" ORDER BY "display_order""#
    ))
    .fetch_all(proxy.pool())
    .await
}

pub async fn find_module(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<Option<ModuleRecord>, sqlx::Error> {
    sqlx::query_as::<_, ModuleRecord>(&format!(
        r#"SELECT {MODULE_COLUMNS} FROM "modules" WHERE "id" = ?"#
    ))
    .bind(module_id)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn find_module_by_order(
    proxy: &DatabaseProxy,
    display_order: i64,
) -> Result<Option<ModuleRecord>, sqlx::Error> {
    sqlx::query_as::<_, ModuleRecord>(&format!(
        r#"SELECT {MODULE_COLUMNS} FROM "modules" WHERE "display_order" = ?"#
    ))
    .bind(display_order)
    .fetch_optional(proxy.pool())
    .await
}

pub async fn modules_by_simulation_type(
    proxy: &DatabaseProxy,
    simulation_type: &str,
) -> Result<Vec<ModuleRecord>, sqlx::Error> {
    sqlx::query_as::<_, ModuleRecord>(&format!(
        r#"
        SELECT {MODULE_COLUMNS} FROM "modules"
        WHERE "has_simulation" = 1 AND "simulation_type" = ?
        ORDER BY "display_order"
        "#
    ))
    .bind(simulation_type)
    .fetch_all(proxy.pool())
    .await
}

pub async fn count_modules(proxy: &DatabaseProxy) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "modules""#)
        .fetch_one(proxy.pool())
        .await
}

pub async fn insert_module(proxy: &DatabaseProxy, module: &NewModule) -> Result<i64, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO "modules" (
            "name", "description", "content", "display_order", "estimated_minutes",
            "has_simulation", "simulation_type", "created_at", "updated_at"
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&module.name)
    .bind(&module.description)
    .bind(&module.content)
    .bind(module.display_order)
    .bind(module.estimated_minutes)
    .bind(module.has_simulation)
    .bind(&module.simulation_type)
    .bind(now)
    .bind(now)
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_module(
    proxy: &DatabaseProxy,
    module_id: i64,
    update: &ModuleUpdate,
) -> Result<(), sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(r#"UPDATE "modules" SET "updated_at" = "#);
    builder.push_bind(Utc::now());

    if let Some(name) = &update.name {
        builder.push(r#", "name" = "#).push_bind(name.clone());
    }
    if let Some(description) = &update.description {
        builder
            .push(r#", "description" = "#)
            .push_bind(description.clone());
    }
    if let Some(content) = &update.content {
        builder.push(r#", "content" = "#).push_bind(content.clone());
    }
    if let Some(has_simulation) = update.has_simulation {
        builder
            .push(r#", "has_simulation" = "#)
            .push_bind(has_simulation);
    }
    if let Some(simulation_type) = &update.simulation_type {
        builder
            .push(r#", "simulation_type" = "#)
            .push_bind(simulation_type.clone());
    }

    builder.push(r#" WHERE "id" = "#).push_bind(module_id);
    builder.build().execute(proxy.pool()).await?;
    Ok(())
}

pub async fn lessons_for_module(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<Vec<LessonRecord>, sqlx::Error> {
    sqlx::query_as::<_, LessonRecord>(
        r#"
        SELECT "id", "module_id", "title", "display_order"
        FROM "lessons" WHERE "module_id" = ?
        ORDER BY "display_order"
        "#,
    )
    .bind(module_id)
    .fetch_all(proxy.pool())
    .await
}

/// Topics of every lesson in the module, in reading order.
pub async fn topics_for_module(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<Vec<TopicRecord>, sqlx::Error> {
    sqlx::query_as::<_, TopicRecord>(
        r#"
        SELECT t."id", t."lesson_id", t."title", t."body", t."display_order"
        FROM "lesson_topics" t
        JOIN "lessons" l ON l."id" = t."lesson_id"
        WHERE l."module_id" = ?
        ORDER BY l."display_order", t."display_order"
        "#,
    )
    .bind(module_id)
    .fetch_all(proxy.pool())
    .await
}

pub async fn topic_belongs_to_module(
    proxy: &DatabaseProxy,
    topic_id: i64,
    module_id: i64,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM "lesson_topics" t
        JOIN "lessons" l ON l."id" = t."lesson_id"
        WHERE t."id" = ? AND l."module_id" = ?
        "#,
    )
    .bind(topic_id)
    .bind(module_id)
    .fetch_one(proxy.pool())
    .await?;
    Ok(count > 0)
}

pub async fn references_for_module(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<Vec<ReferenceRecord>, sqlx::Error> {
    sqlx::query_as::<_, ReferenceRecord>(
        r#"
        SELECT "id", "module_id", "label", "url", "display_order"
        FROM "module_references" WHERE "module_id" = ?
        ORDER BY "display_order"
        "#,
    )
    .bind(module_id)
    .fetch_all(proxy.pool())
    .await
}

pub async fn insert_lesson(
    proxy: &DatabaseProxy,
    module_id: i64,
    title: &str,
    display_order: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO "lessons" ("module_id", "title", "display_order") VALUES (?, ?, ?)"#,
    )
    .bind(module_id)
    .bind(title)
    .bind(display_order)
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn insert_topic(
    proxy: &DatabaseProxy,
    lesson_id: i64,
    title: &str,
    body: &str,
    display_order: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "lesson_topics" ("lesson_id", "title", "body", "display_order")
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(lesson_id)
    .bind(title)
    .bind(body)
    .bind(display_order)
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn insert_reference(
    proxy: &DatabaseProxy,
    module_id: i64,
    label: &str,
    url: &str,
    display_order: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO "module_references" ("module_id", "label", "url", "display_order")
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(module_id)
    .bind(label)
    .bind(url)
    .bind(display_order)
    .execute(proxy.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn count_lessons(proxy: &DatabaseProxy, module_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "lessons" WHERE "module_id" = ?"#)
        .bind(module_id)
        .fetch_one(proxy.pool())
        .await
}

pub async fn count_references(proxy: &DatabaseProxy, module_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "module_references" WHERE "module_id" = ?"#)
        .bind(module_id)
        .fetch_one(proxy.pool())
        .await
}

pub async fn insert_question(
    proxy: &DatabaseProxy,
    bank: QuestionBank,
    question: &NewQuestion,
) -> Result<i64, sqlx::Error> {
    let [a, b, c, d] = &question.options;
    let now = Utc::now();
    let result = match bank {
        QuestionBank::KnowledgeCheck => {
            sqlx::query(
                r#"
                INSERT INTO "knowledge_check_questions" (
                    "module_id", "question_text", "option_a", "option_b", "option_c", "option_d",
                    "correct_answer", "explanation", "question_set", "created_at"
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(question.module_id)
            .bind(&question.question_text)
            .bind(a)
            .bind(b)
            .bind(c)
            .bind(d)
            .bind(&question.correct_answer)
            .bind(&question.explanation)
            .bind(question.question_set)
            .bind(now)
            .execute(proxy.pool())
            .await?
        }
        QuestionBank::FinalAssessment => {
            sqlx::query(
                r#"
                INSERT INTO "final_assessment_questions" (
                    "question_text", "option_a", "option_b", "option_c", "option_d",
                    "correct_answer", "explanation", "question_set", "created_at"
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&question.question_text)
            .bind(a)
            .bind(b)
            .bind(c)
            .bind(d)
            .bind(&question.correct_answer)
            .bind(&question.explanation)
            .bind(question.question_set)
            .bind(now)
            .execute(proxy.pool())
            .await?
        }
    };
    Ok(result.last_insert_rowid())
}

pub async fn module_questions(
    proxy: &DatabaseProxy,
    module_id: i64,
    question_set: Option<i64>,
) -> Result<Vec<QuestionRecord>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(QuestionBank::KnowledgeCheck.select());
    builder.push(r#" WHERE "module_id" = "#).push_bind(module_id);
    if let Some(set) = question_set {
        builder.push(r#" AND "question_set" = "#).push_bind(set);
    }
    builder.push(r#" ORDER BY "id""#);
    builder
        .build_query_as::<QuestionRecord>()
        .fetch_all(proxy.pool())
        .await
}

pub async fn final_questions(
    proxy: &DatabaseProxy,
    question_set: Option<i64>,
) -> Result<Vec<QuestionRecord>, sqlx::Error> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(QuestionBank::FinalAssessment.select());
    if let Some(set) = question_set {
        builder.push(r#" WHERE "question_set" = "#).push_bind(set);
    }
    builder.push(r#" ORDER BY "id""#);
    builder
        .build_query_as::<QuestionRecord>()
        .fetch_all(proxy.pool())
        .await
}

/// Fetches questions by id, preserving the order of `ids`.
pub async fn questions_by_ids(
    proxy: &DatabaseProxy,
    bank: QuestionBank,
    ids: &[i64],
) -> Result<Vec<QuestionRecord>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(bank.select());
    builder.push(r#" WHERE "id" IN ("#);
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let mut rows = builder
        .build_query_as::<QuestionRecord>()
        .fetch_all(proxy.pool())
        .await?;
    rows.sort_by_key(|row| ids.iter().position(|id| *id == row.id).unwrap_or(usize::MAX));
    Ok(rows)
}

pub async fn count_questions(proxy: &DatabaseProxy, bank: QuestionBank) -> Result<i64, sqlx::Error> {
    let sql = match bank {
        QuestionBank::KnowledgeCheck => r#"SELECT COUNT(*) FROM "knowledge_check_questions""#,
        QuestionBank::FinalAssessment => r#"SELECT COUNT(*) FROM "final_assessment_questions""#,
    };
    sqlx::query_scalar(sql).fetch_one(proxy.pool()).await
}

pub async fn count_module_questions(
    proxy: &DatabaseProxy,
    module_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM "knowledge_check_questions" WHERE "module_id" = ?"#)
        .bind(module_id)
        .fetch_one(proxy.pool())
        .await
}

/// Number of distinct question sets; never less than one.
pub async fn question_set_count(
    proxy: &DatabaseProxy,
    bank: QuestionBank,
    module_id: Option<i64>,
) -> Result<i64, sqlx::Error> {
    let count: i64 = match (bank, module_id) {
        (QuestionBank::KnowledgeCheck, Some(module_id)) => {
            sqlx::query_scalar(
                r#"SELECT COUNT(DISTINCT "question_set") FROM "knowledge_check_questions" WHERE "module_id" = ?"#,
            )
            .bind(module_id)
            .fetch_one(proxy.pool())
            .await?
        }
        (QuestionBank::KnowledgeCheck, None) => {
            sqlx::query_scalar(
                r#"SELECT COUNT(DISTINCT "question_set") FROM "knowledge_check_questions""#,
            )
            .fetch_one(proxy.pool())
            .await?
        }
        (QuestionBank::FinalAssessment, _) => {
            sqlx::query_scalar(
                r#"SELECT COUNT(DISTINCT "question_set") FROM "final_assessment_questions""#,
            )
            .fetch_one(proxy.pool())
            .await?
        }
    };
    Ok(count.max(1))
}
