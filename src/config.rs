/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 课程页面存放目录
    pub courses_dir: String,
    /// 课程文件名后缀（用于筛选和推导课程标识）
    pub course_suffix: String,
    /// 排除的文件名（已经包含完整结构的页面）
    pub excluded_files: Vec<String>,
    /// 课程目录 TOML 文件路径
    pub catalog_path: String,
    /// 警告文件路径
    pub warn_file: String,
    /// 课程进度记录文件路径
    pub progress_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            courses_dir: "courses".to_string(),
            course_suffix: "-progressive.html".to_string(),
            excluded_files: vec!["pt-msk-001-progressive.html".to_string()],
            catalog_path: "courses.toml".to_string(),
            warn_file: "warn.txt".to_string(),
            progress_file: "progress.json".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            courses_dir: std::env::var("COURSES_DIR").unwrap_or(default.courses_dir),
            course_suffix: std::env::var("COURSE_SUFFIX").unwrap_or(default.course_suffix),
            excluded_files: std::env::var("EXCLUDED_FILES")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.excluded_files),
            catalog_path: std::env::var("CATALOG_PATH").unwrap_or(default.catalog_path),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            progress_file: std::env::var("PROGRESS_FILE").unwrap_or(default.progress_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
