use std::path::PathBuf;

use add_course_structure::{App, BatchStats, Config};

const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Course</title></head>
<body>
<!-- Progress -->
<div class="progress-container"></div>
<div class="modules">Module content</div>
<script>
var progress = 0;
</script>
</body>
</html>
"#;

const SAMPLE_CATALOG: &str = r#"
fallback = "balance-gait-001"

[courses.balance-gait-001]
title = "Balance, Gait, and Vestibular Management"
hours = "3.0"
modules = 12

[[courses.balance-gait-001.questions]]
prompt = "Which canal is most commonly affected in BPPV?"
options = ["Anterior", "Posterior", "Horizontal", "All equally"]
correct = 1

[[courses.balance-gait-001.questions]]
prompt = "The Epley maneuver treats:"
options = ["Vestibular neuritis", "Meniere's disease", "Posterior canal BPPV", "Labyrinthitis"]
correct = 2
"#;

/// 搭建临时课程目录和配置
fn setup(tag: &str) -> (PathBuf, Config) {
    let root = std::env::temp_dir().join(format!(
        "add_course_structure_it_{}_{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&root);
    let courses_dir = root.join("courses");
    std::fs::create_dir_all(&courses_dir).unwrap();

    std::fs::write(root.join("courses.toml"), SAMPLE_CATALOG).unwrap();

    let config = Config {
        courses_dir: courses_dir.to_string_lossy().to_string(),
        catalog_path: root.join("courses.toml").to_string_lossy().to_string(),
        warn_file: root.join("warn.txt").to_string_lossy().to_string(),
        progress_file: root.join("progress.json").to_string_lossy().to_string(),
        output_log_file: root.join("output.txt").to_string_lossy().to_string(),
        ..Config::default()
    };

    (root, config)
}

#[tokio::test]
async fn test_batch_injects_then_second_run_skips() {
    let (root, config) = setup("batch");
    let page_path = root.join("courses/balance-gait-001-progressive.html");
    std::fs::write(&page_path, SAMPLE_PAGE).unwrap();

    // 第一次运行：注入完整结构
    let stats = App::initialize(config.clone())
        .await
        .expect("初始化应该成功")
        .run()
        .await
        .expect("批量处理应该成功");

    assert_eq!(
        stats,
        BatchStats {
            total: 1,
            processed: 1,
            skipped: 0,
            warned: 0,
            failed: 0,
        }
    );

    let content = std::fs::read_to_string(&page_path).unwrap();
    assert!(content.contains(r#"id="adminControls""#));
    assert!(content.contains(r#"id="course-feedback""#));
    assert!(content.contains(r#"id="final-assessment""#));
    assert!(content.contains("CERTIFICATE OF COMPLETION"));
    assert!(content.contains("Balance, Gait, and Vestibular Management"));
    assert!(content.contains("3.0 contact hours"));
    assert!(content.contains("var courseExamQuestions"));
    assert!(content.contains("function submitFinalExam"));

    // 第二次运行：完成标记命中，文件逐字节不变
    let stats = App::initialize(config)
        .await
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(stats.processed, 0);
    assert_eq!(stats.skipped, 1);
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), content);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_unknown_course_uses_fallback_and_reports_warning() {
    let (root, config) = setup("fallback");
    let page_path = root.join("courses/mystery-course-001-progressive.html");
    std::fs::write(&page_path, SAMPLE_PAGE).unwrap();

    let stats = App::initialize(config.clone())
        .await
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(stats.processed, 1);
    assert_eq!(stats.warned, 1);

    // 兜底条目的标题和题目进了页面
    let content = std::fs::read_to_string(&page_path).unwrap();
    assert!(content.contains("Balance, Gait, and Vestibular Management"));
    assert!(content.contains("Which canal is most commonly affected in BPPV?"));

    // 兜底命中写入了 warn.txt
    let warns = std::fs::read_to_string(root.join("warn.txt")).unwrap();
    assert!(warns.contains("mystery-course-001"));
    assert!(warns.contains("兜底"));

    // 第二次运行：完成标记命中，跳过且不追加重复警告
    let stats = App::initialize(config).await.unwrap().run().await.unwrap();
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.warned, 0);
    assert_eq!(std::fs::read_to_string(root.join("warn.txt")).unwrap(), warns);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_excluded_file_is_not_touched() {
    let (root, config) = setup("excluded");
    let excluded_path = root.join("courses/pt-msk-001-progressive.html");
    std::fs::write(&excluded_path, SAMPLE_PAGE).unwrap();

    let stats = App::initialize(config)
        .await
        .unwrap()
        .run()
        .await
        .unwrap();

    // 排除文件不进入批量
    assert_eq!(stats.total, 0);
    assert_eq!(std::fs::read_to_string(&excluded_path).unwrap(), SAMPLE_PAGE);

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_page_without_anchors_is_left_unmodified() {
    let (root, config) = setup("no_anchor");
    let page_path = root.join("courses/balance-gait-001-progressive.html");
    std::fs::write(&page_path, "not really a course page").unwrap();

    let stats = App::initialize(config)
        .await
        .unwrap()
        .run()
        .await
        .unwrap();

    // 锚点全部缺失：文件保持原样，计入警告
    assert_eq!(stats.processed, 0);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.warned, 1);
    assert_eq!(
        std::fs::read_to_string(&page_path).unwrap(),
        "not really a course page"
    );

    let warns = std::fs::read_to_string(root.join("warn.txt")).unwrap();
    assert!(warns.contains("admin-panel"));
    assert!(warns.contains("exam-script"));

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_broken_catalog_fails_before_touching_files() {
    let (root, config) = setup("broken_catalog");
    let page_path = root.join("courses/balance-gait-001-progressive.html");
    std::fs::write(&page_path, SAMPLE_PAGE).unwrap();

    // 兜底条目指向不存在的课程
    std::fs::write(
        root.join("courses.toml"),
        SAMPLE_CATALOG.replace("fallback = \"balance-gait-001\"", "fallback = \"missing\""),
    )
    .unwrap();

    assert!(App::initialize(config).await.is_err());
    assert_eq!(std::fs::read_to_string(&page_path).unwrap(), SAMPLE_PAGE);

    let _ = std::fs::remove_dir_all(&root);
}
