mod common;

use awareness_backend::simulations::{bank_for, ScenarioBank, SimulationType};
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, TestApp};

/// Submits the first scenario of the module's simulation with a correct choice.
async fn pass_simulation(app: &TestApp, token: &str, module_id: i64, kind: SimulationType) -> Value {
    let bank = bank_for(kind);
    let scenario = &bank.scenarios()[0];
    let choice = bank.correct_options(scenario)[0];

    let res = app
        .post(
            &format!("/api/simulations/{}", kind.as_str()),
            Some(token),
            json!({
                "scenarioId": scenario.id,
                "choice": choice,
                "timeTaken": 30,
                "moduleId": module_id
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "simulation: {}", res.body);
    res.body["data"].clone()
}

async fn complete_all_modules(app: &TestApp, token: &str) {
    let path = app.get("/api/modules", Some(token)).await;
    let modules: Vec<(i64, Option<String>)> = path.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| {
            (
                entry["id"].as_i64().unwrap(),
                entry["simulationType"].as_str().map(str::to_string),
            )
        })
        .collect();
    assert_eq!(modules.len(), 5);

    for (module_id, simulation) in modules {
        let outcome = app.pass_knowledge_check(token, module_id).await;
        assert_eq!(outcome["passed"], true);
        if let Some(kind) = simulation.as_deref().and_then(SimulationType::parse) {
            let sim = pass_simulation(app, token, module_id, kind).await;
            assert_eq!(sim["moduleCompleted"], true);
        } else {
            assert_eq!(outcome["moduleCompleted"], true);
        }
    }
}

#[tokio::test]
async fn learning_path_locks_modules_after_the_first() {
    let app = spawn_app().await;
    let token = app.register("learner_one").await;

    let path = app.get("/api/modules", Some(&token)).await;
    assert_eq!(path.status, StatusCode::OK);
    let entries = path.body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["accessible"], true);
    assert_eq!(entries[1]["accessible"], false);
    assert!(entries[1]["lockedReason"].is_string());

    let second = entries[1]["id"].as_i64().unwrap();
    let res = app.get(&format!("/api/modules/{second}"), Some(&token)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let first = entries[0]["id"].as_i64().unwrap();
    let open = app
        .get(&format!("/api/modules/{first}/eligibility"), Some(&token))
        .await;
    assert_eq!(open.status, StatusCode::OK, "{}", open.body);
    assert_eq!(open.body["data"]["eligible"], true);
    assert!(open.body["data"]["prerequisites"].as_array().unwrap().is_empty());

    let third = entries[2]["id"].as_i64().unwrap();
    let locked = app
        .get(&format!("/api/modules/{third}/eligibility"), Some(&token))
        .await;
    assert_eq!(locked.status, StatusCode::OK, "{}", locked.body);
    assert_eq!(locked.body["data"]["eligible"], false);
    assert_eq!(locked.body["data"]["prerequisite"]["displayOrder"], 2);
    let orders: Vec<i64> = locked.body["data"]["prerequisites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["displayOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2]);

    let res = app
        .get(&format!("/api/modules/{second}/assessment"), Some(&token))
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_module_is_not_found() {
    let app = spawn_app().await;
    let token = app.register("learner_404").await;

    let res = app.get("/api/modules/9999", Some(&token)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn passing_the_first_knowledge_check_unlocks_module_two() {
    let app = spawn_app().await;
    let token = app.register("learner_two").await;
    let first = app.module_id(&token, 1).await;
    let second = app.module_id(&token, 2).await;

    let outcome = app.pass_knowledge_check(&token, first).await;
    assert_eq!(outcome["percentage"], 100);
    assert_eq!(outcome["passed"], true);
    assert_eq!(outcome["moduleCompleted"], true);
    assert_eq!(outcome["attemptsUsed"], 1);

    let res = app.get(&format!("/api/modules/{second}"), Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);

    let dashboard = app.get("/api/dashboard", Some(&token)).await;
    assert_eq!(dashboard.status, StatusCode::OK, "{}", dashboard.body);
    assert_eq!(dashboard.body["data"]["nextModule"]["id"], second);
    let completed = dashboard.body["data"]["completedModules"].as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["id"], first);

    let history = app
        .get("/api/history/assessments?type=knowledge_check", Some(&token))
        .await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body["data"]["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn failing_knowledge_check_does_not_complete_module() {
    let app = spawn_app().await;
    let token = app.register("learner_fail").await;
    let first = app.module_id(&token, 1).await;

    app.get(&format!("/api/modules/{first}"), Some(&token)).await;
    let issued = app
        .get(&format!("/api/modules/{first}/assessment"), Some(&token))
        .await;
    let mut answers = serde_json::Map::new();
    for question in issued.body["data"]["questions"].as_array().unwrap() {
        let id = question["id"].as_i64().unwrap();
        let key = app.knowledge_check_key(id).await;
        let wrong = if key == "a" { "b" } else { "a" };
        answers.insert(id.to_string(), json!(wrong));
    }

    let res = app
        .post(
            &format!("/api/modules/{first}/assessment"),
            Some(&token),
            json!({ "answers": answers }),
        )
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["data"]["percentage"], 0);
    assert_eq!(res.body["data"]["passed"], false);
    assert_eq!(res.body["data"]["moduleCompleted"], false);

    let second = app.module_id(&token, 2).await;
    let res = app.get(&format!("/api/modules/{second}"), Some(&token)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn knowledge_check_rejects_invalid_answers() {
    let app = spawn_app().await;
    let token = app.register("learner_bad").await;
    let first = app.module_id(&token, 1).await;

    let issued = app
        .get(&format!("/api/modules/{first}/assessment"), Some(&token))
        .await;
    assert_eq!(issued.status, StatusCode::OK);
    let answers: serde_json::Map<String, Value> = issued.body["data"]["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| (q["id"].as_i64().unwrap().to_string(), json!("z")))
        .collect();

    let res = app
        .post(
            &format!("/api/modules/{first}/assessment"),
            Some(&token),
            json!({ "answers": answers }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn knowledge_check_attempts_are_capped() {
    let app = spawn_app().await;
    let token = app.register("learner_capped").await;
    let user_id = app.user_id(&token).await;
    let first = app.module_id(&token, 1).await;
    app.get(&format!("/api/modules/{first}"), Some(&token)).await;

    app.set_knowledge_check_attempts(user_id, first, 9).await;
    let last = app
        .get(&format!("/api/modules/{first}/assessment"), Some(&token))
        .await;
    assert_eq!(last.status, StatusCode::OK, "{}", last.body);
    assert_eq!(last.body["data"]["attemptNumber"], 10);
    assert_eq!(last.body["data"]["attemptsRemaining"], 1);

    app.set_knowledge_check_attempts(user_id, first, 10).await;
    let res = app
        .get(&format!("/api/modules/{first}/assessment"), Some(&token))
        .await;
    assert_eq!(res.status, StatusCode::TOO_MANY_REQUESTS, "{}", res.body);
    assert_eq!(res.body["success"], false);
}

#[tokio::test]
async fn module_completion_is_guarded() {
    let app = spawn_app().await;
    let token = app.register("learner_guard").await;
    let first = app.module_id(&token, 1).await;
    app.get(&format!("/api/modules/{first}"), Some(&token)).await;

    let early = app
        .post(
            "/api/progress",
            Some(&token),
            json!({ "moduleId": first, "status": "completed" }),
        )
        .await;
    assert_eq!(early.status, StatusCode::BAD_REQUEST, "{}", early.body);
    assert_eq!(early.body["code"], "VALIDATION_ERROR");

    let outcome = app.pass_knowledge_check(&token, first).await;
    assert_eq!(outcome["moduleCompleted"], true);

    let downgrade = app
        .post(
            "/api/progress",
            Some(&token),
            json!({ "moduleId": first, "status": "in_progress" }),
        )
        .await;
    assert_eq!(downgrade.status, StatusCode::CONFLICT, "{}", downgrade.body);

    let res = app
        .post(
            "/api/progress",
            Some(&token),
            json!({ "moduleId": first, "score": 5, "timeSpent": 12 }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    let progress = &res.body["data"]["progress"];
    assert_eq!(progress["status"], "completed");
    assert_eq!(progress["score"], 100);
    assert_eq!(progress["timeSpent"], 12);
}

#[tokio::test]
async fn topic_progress_accepts_form_bodies() {
    let app = spawn_app().await;
    let token = app.register("learner_topic").await;
    let first = app.module_id(&token, 1).await;

    let view = app.get(&format!("/api/modules/{first}"), Some(&token)).await;
    let topic_id = view.body["data"]["lessons"][0]["topics"][0]["id"]
        .as_i64()
        .unwrap();

    let res = app
        .form(
            "/api/progress",
            Some(&token),
            &format!("moduleId={first}&topicId={topic_id}&completed=true"),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    assert_eq!(res.body["data"]["topic"]["topicId"], topic_id);
    assert_eq!(res.body["data"]["topic"]["completed"], true);

    let view = app.get(&format!("/api/modules/{first}"), Some(&token)).await;
    assert_eq!(view.body["data"]["completedTopics"], 1);
    assert_eq!(view.body["data"]["lessons"][0]["topics"][0]["completed"], true);
}

/// Issues the module's knowledge check and builds a form body with every
/// answer correct, naming each field with `field(question_id)`.
async fn knowledge_check_form(
    app: &TestApp,
    token: &str,
    module_id: i64,
    field: fn(i64) -> String,
) -> String {
    app.get(&format!("/api/modules/{module_id}"), Some(token)).await;
    let issued = app
        .get(&format!("/api/modules/{module_id}/assessment"), Some(token))
        .await;
    assert_eq!(issued.status, StatusCode::OK, "{}", issued.body);

    let mut pairs = Vec::new();
    for question in issued.body["data"]["questions"].as_array().unwrap() {
        let id = question["id"].as_i64().unwrap();
        pairs.push(format!("{}={}", field(id), app.knowledge_check_key(id).await));
    }
    pairs.push("timeTaken=75".to_string());
    pairs.join("&")
}

#[tokio::test]
async fn knowledge_check_accepts_form_bodies() {
    let app = spawn_app().await;

    let token = app.register("learner_form_q").await;
    let first = app.module_id(&token, 1).await;
    let body = knowledge_check_form(&app, &token, first, |id| format!("question_{id}")).await;
    let res = app
        .form(&format!("/api/modules/{first}/assessment"), Some(&token), &body)
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    assert_eq!(res.body["data"]["percentage"], 100);
    assert_eq!(res.body["data"]["passed"], true);

    let token = app.register("learner_form_a").await;
    let body = knowledge_check_form(&app, &token, first, |id| format!("answers%5B{id}%5D")).await;
    let res = app
        .form(&format!("/api/modules/{first}/assessment"), Some(&token), &body)
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    assert_eq!(res.body["data"]["correct"], 5);
    assert_eq!(res.body["data"]["moduleCompleted"], true);
}

#[tokio::test]
async fn simulations_follow_module_locks() {
    let app = spawn_app().await;
    let token = app.register("learner_sim").await;

    let kinds = app.get("/api/simulations", Some(&token)).await;
    assert_eq!(kinds.status, StatusCode::OK);
    assert_eq!(kinds.body["data"].as_array().unwrap().len(), 4);

    let res = app
        .post(
            "/api/simulations/quid_pro_quo",
            Some(&token),
            json!({ "scenarioId": 1, "choice": "b" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let unknown = app.get("/api/simulations/tailgating", Some(&token)).await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn simulation_scenario_hides_answer_key() {
    let app = spawn_app().await;
    let token = app.register("learner_key").await;
    let first = app.module_id(&token, 1).await;
    app.pass_knowledge_check(&token, first).await;

    let res = app
        .get("/api/simulations/quid_pro_quo?scenario=1", Some(&token))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    let options = res.body["data"]["scenario"]["options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert!(options.iter().all(|option| option.get("correct").is_none()));
}

#[tokio::test]
async fn module_with_simulation_needs_both_parts() {
    let app = spawn_app().await;
    let token = app.register("learner_both").await;
    let first = app.module_id(&token, 1).await;
    let second = app.module_id(&token, 2).await;
    let third = app.module_id(&token, 3).await;
    app.pass_knowledge_check(&token, first).await;

    let outcome = app.pass_knowledge_check(&token, second).await;
    assert_eq!(outcome["passed"], true);
    assert_eq!(outcome["moduleCompleted"], false);
    assert_eq!(outcome["simulationPending"], true);
    assert_eq!(
        app.get(&format!("/api/modules/{third}"), Some(&token)).await.status,
        StatusCode::FORBIDDEN
    );

    let sim = pass_simulation(&app, &token, second, SimulationType::QuidProQuo).await;
    assert_eq!(sim["correct"], true);
    assert_eq!(sim["moduleCompleted"], true);
    assert_eq!(
        app.get(&format!("/api/modules/{third}"), Some(&token)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn final_assessment_is_gated_on_modules() {
    let app = spawn_app().await;
    let token = app.register("learner_gate").await;

    let status = app.get("/api/final-assessment", Some(&token)).await;
    assert_eq!(status.status, StatusCode::OK);
    assert_eq!(status.body["data"]["eligible"], false);
    assert!(status.body["data"]["bestPercentage"].is_null());

    let res = app.get("/api/final-assessment/questions", Some(&token)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = app
        .post("/api/final-assessment", Some(&token), json!({ "answers": {} }))
        .await;
    assert!(res.status.is_client_error());

    let survey = app
        .post("/api/survey", Some(&token), json!({ "rating": 5 }))
        .await;
    assert_eq!(survey.status, StatusCode::FORBIDDEN);

    let certificate = app.get("/api/certificate", Some(&token)).await;
    assert_eq!(certificate.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn full_program_to_certificate() {
    let app = spawn_app().await;
    let token = app.register("learner_cert").await;
    complete_all_modules(&app, &token).await;

    let status = app.get("/api/final-assessment", Some(&token)).await;
    assert_eq!(status.body["data"]["eligible"], true, "{}", status.body);

    let issued = app.get("/api/final-assessment/questions", Some(&token)).await;
    assert_eq!(issued.status, StatusCode::OK, "{}", issued.body);
    let questions = issued.body["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 25);

    let mut answers = serde_json::Map::new();
    for question in questions {
        let id = question["id"].as_i64().unwrap();
        answers.insert(id.to_string(), json!(app.final_question_key(id).await));
    }
    let graded = app
        .post(
            "/api/final-assessment",
            Some(&token),
            json!({ "answers": answers, "timeTaken": 900 }),
        )
        .await;
    assert_eq!(graded.status, StatusCode::CREATED, "{}", graded.body);
    assert_eq!(graded.body["data"]["passed"], true);
    assert_eq!(graded.body["data"]["percentage"], 100);

    let again = app.get("/api/final-assessment/questions", Some(&token)).await;
    assert!(again.status.is_client_error());

    let status = app.get("/api/final-assessment", Some(&token)).await;
    assert_eq!(status.body["data"]["passed"], true);
    assert_eq!(status.body["data"]["bestPercentage"], 100);

    let early = app.get("/api/certificate", Some(&token)).await;
    assert_eq!(early.status, StatusCode::FORBIDDEN);

    let survey = app
        .post(
            "/api/survey",
            Some(&token),
            json!({ "rating": 5, "feedbackText": "Clear and practical", "difficultyLevel": "medium" }),
        )
        .await;
    assert_eq!(survey.status, StatusCode::CREATED, "{}", survey.body);

    let duplicate = app
        .post("/api/survey", Some(&token), json!({ "rating": 4 }))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let certificate = app.get("/api/certificate", Some(&token)).await;
    assert_eq!(certificate.status, StatusCode::OK, "{}", certificate.body);
    let data = &certificate.body["data"];
    assert_eq!(data["username"], "learner_cert");
    assert_eq!(data["recipientName"], "Test Learner");
    assert_eq!(data["finalPercentage"], 100);
    assert_eq!(data["certificateId"].as_str().unwrap().len(), 16);

    let dashboard = app.get("/api/dashboard", Some(&token)).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert_eq!(dashboard.body["data"]["certificateAvailable"], true);
    assert_eq!(dashboard.body["data"]["user"]["modulesCompleted"], 5);
}

/// Takes the final assessment with every answer wrong and returns the graded body.
async fn fail_final_assessment(app: &TestApp, token: &str) -> Value {
    let issued = app.get("/api/final-assessment/questions", Some(token)).await;
    assert_eq!(issued.status, StatusCode::OK, "{}", issued.body);

    let mut answers = serde_json::Map::new();
    for question in issued.body["data"]["questions"].as_array().unwrap() {
        let id = question["id"].as_i64().unwrap();
        let key = app.final_question_key(id).await;
        let wrong = if key == "a" { "b" } else { "a" };
        answers.insert(id.to_string(), json!(wrong));
    }
    let graded = app
        .post("/api/final-assessment", Some(token), json!({ "answers": answers }))
        .await;
    assert_eq!(graded.status, StatusCode::CREATED, "{}", graded.body);
    assert_eq!(graded.body["data"]["passed"], false);
    graded.body["data"].clone()
}

#[tokio::test]
async fn final_assessment_cools_down_after_three_failures() {
    let app = spawn_app().await;
    let token = app.register("learner_cooldown").await;
    complete_all_modules(&app, &token).await;

    let first = fail_final_assessment(&app, &token).await;
    assert_eq!(first["window"]["status"], "allowed");
    assert_eq!(first["window"]["attemptsRemaining"], 2);

    let second = fail_final_assessment(&app, &token).await;
    assert_eq!(second["window"]["attemptsRemaining"], 1);

    let third = fail_final_assessment(&app, &token).await;
    assert_eq!(third["window"]["status"], "coolingDown");
    assert_eq!(third["window"]["remainingHours"], 48);
    assert!(third["window"]["availableAt"].is_string());

    let blocked = app.get("/api/final-assessment/questions", Some(&token)).await;
    assert_eq!(blocked.status, StatusCode::TOO_MANY_REQUESTS, "{}", blocked.body);

    let status = app.get("/api/final-assessment", Some(&token)).await;
    assert_eq!(status.body["data"]["eligible"], false);
    assert_eq!(status.body["data"]["totalAttempts"], 3);
    assert_eq!(status.body["data"]["bestPercentage"], 0);
    assert_eq!(status.body["data"]["window"]["status"], "coolingDown");
}
