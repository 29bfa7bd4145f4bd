//! 页面考试脚本生成 - 业务能力层
//!
//! 只负责"渲染每个课程页面嵌入的 JS"能力。脚本本体在所有页面间相同，
//! 仅题目数组随课程变化；题目以 JSON 形式内联（`q` / `o` / `a` 键，
//! 与页面运行时保持一致）。

use serde::Serialize;

use crate::error::AppResult;
use crate::models::ExamQuestion;

/// 题目的页面内联视图
#[derive(Debug, Serialize)]
struct JsQuestion<'a> {
    #[serde(rename = "q")]
    prompt: &'a str,
    #[serde(rename = "o")]
    options: &'a [String],
    #[serde(rename = "a")]
    correct: usize,
}

impl<'a> From<&'a ExamQuestion> for JsQuestion<'a> {
    fn from(question: &'a ExamQuestion) -> Self {
        Self {
            prompt: &question.prompt,
            options: &question.options,
            correct: question.correct,
        }
    }
}

/// 渲染课程页面的考试脚本
///
/// 返回的文本插入到页面最后一个 `</script>` 之前
pub fn render_course_script(questions: &[ExamQuestion]) -> AppResult<String> {
    let views: Vec<JsQuestion> = questions.iter().map(JsQuestion::from).collect();
    let questions_json = serde_json::to_string(&views)?;

    Ok(format!(
        "\n// Course-specific exam questions\nvar courseExamQuestions = {};\n{}",
        questions_json, PAGE_RUNTIME
    ))
}

/// 页面运行时脚本（课程间完全一致的部分）
///
/// 状态机与 `exam::ExamSession` 一一对应：
/// currentExam 持有题目、答案映射、当前题目光标和提交标志；
/// submitFinalExam 对应 submit()，retakeExam 对应 retake()
const PAGE_RUNTIME: &str = r##"
// Rating selection
function rateCourse(rating) {
    document.getElementById('overall-rating').value = rating;
    var stars = document.querySelectorAll('.star-rating');
    for (var i = 0; i < stars.length; i++) {
        stars[i].style.opacity = i < rating ? '1' : '0.3';
    }
}

// Submit feedback
function submitFeedback() {
    var overallRating = document.getElementById('overall-rating').value;

    if (!overallRating) {
        alert('Please provide an overall course rating');
        return;
    }

    var courseId = window.location.pathname.split('/').pop().replace('-progressive.html', '');
    var feedback = {
        submitted: true,
        timestamp: new Date().toISOString()
    };
    localStorage.setItem(courseId + '-feedback', JSON.stringify(feedback));

    alert('Thank you for your feedback! Final exam is now available.');

    document.getElementById('final-assessment').style.display = 'block';
    document.getElementById('final-exam-content').style.display = 'block';
    initFinalExam();

    document.getElementById('final-assessment').scrollIntoView({ behavior: 'smooth' });
}

// Final exam state
var currentExam = {
    questions: [],
    answers: [],
    currentQuestion: 0,
    submitted: false
};

function initFinalExam() {
    currentExam.questions = courseExamQuestions;
    currentExam.answers = new Array(currentExam.questions.length).fill(null);
    currentExam.currentQuestion = 0;
    currentExam.submitted = false;
    displayExamQuestion(0);
}

function displayExamQuestion(index) {
    if (index < 0 || index >= currentExam.questions.length) return;
    currentExam.currentQuestion = index;
    var container = document.getElementById('exam-questions-container');
    var question = currentExam.questions[index];

    var html = '<div style="background:white;padding:1.5rem;border-radius:8px;margin-bottom:1rem;border:1px solid #e2e8f0;">';
    html += '<div style="font-weight:600;margin-bottom:1rem;color:#1e293b;">Question ' + (index + 1) + ' of ' + currentExam.questions.length + '</div>';
    html += '<div style="margin-bottom:1rem;font-size:1.05rem;">' + question.q + '</div>';
    html += '<div style="display:flex;flex-direction:column;gap:0.5rem;">';

    for (var i = 0; i < question.o.length; i++) {
        var selected = currentExam.answers[index] === i ? 'checked' : '';
        html += '<label style="display:flex;align-items:center;padding:0.75rem;background:#f8fafc;border-radius:6px;cursor:pointer;">';
        html += '<input type="radio" name="exam-q' + index + '" value="' + i + '" ' + selected + ' onchange="recordExamAnswer(' + index + ', ' + i + ')" style="margin-right:0.75rem;">';
        html += '<span>' + String.fromCharCode(65 + i) + ') ' + question.o[i] + '</span>';
        html += '</label>';
    }

    html += '</div></div>';

    html += '<div style="display:flex;justify-content:space-between;margin-top:1.5rem;">';
    if (index > 0) {
        html += '<button onclick="displayExamQuestion(' + (index - 1) + ')" style="padding:0.75rem 1.5rem;background:#6b7280;color:white;border:none;border-radius:6px;cursor:pointer;">Previous</button>';
    } else {
        html += '<span></span>';
    }

    if (index < currentExam.questions.length - 1) {
        html += '<button onclick="displayExamQuestion(' + (index + 1) + ')" style="padding:0.75rem 1.5rem;background:#059669;color:white;border:none;border-radius:6px;cursor:pointer;">Next</button>';
    } else {
        html += '<button onclick="submitFinalExam()" style="padding:0.75rem 1.5rem;background:#dc2626;color:white;border:none;border-radius:6px;font-weight:600;cursor:pointer;">Submit Exam</button>';
    }
    html += '</div>';

    var answered = currentExam.answers.filter(function(a) { return a !== null; }).length;
    html += '<div style="text-align:center;margin-top:1rem;color:#64748b;">Progress: ' + answered + '/' + currentExam.questions.length + ' answered</div>';

    container.innerHTML = html;
}

function recordExamAnswer(questionIndex, answerIndex) {
    if (currentExam.submitted) return;
    currentExam.answers[questionIndex] = answerIndex;
}

function submitFinalExam() {
    var correct = 0;
    for (var i = 0; i < currentExam.questions.length; i++) {
        if (currentExam.answers[i] === currentExam.questions[i].a) {
            correct++;
        }
    }

    var percentage = Math.round((correct / currentExam.questions.length) * 100);
    var passed = percentage >= 70;
    currentExam.submitted = true;

    var resultsDiv = document.getElementById('exam-results');
    resultsDiv.style.display = 'block';
    resultsDiv.style.background = passed ? '#ecfdf5' : '#fef2f2';
    resultsDiv.style.border = passed ? '2px solid #10b981' : '2px solid #ef4444';

    var html = '<h3>' + (passed ? 'Congratulations! You Passed!' : 'Did Not Pass') + '</h3>';
    html += '<p>You scored <strong>' + correct + '/' + currentExam.questions.length + '</strong> (' + percentage + '%)</p>';

    if (passed) {
        html += '<p style="color:#059669;font-weight:600;">Your certificate is now available!</p>';
        document.getElementById('certificate-section').style.display = 'block';

        var dateStr = new Date().toLocaleDateString('en-US', { year: 'numeric', month: 'long', day: 'numeric' });
        document.getElementById('cert-completion-date').textContent = dateStr;

        var courseId = window.location.pathname.split('/').pop().replace('-progressive.html', '');
        localStorage.setItem(courseId + '-completed', 'true');
    } else {
        html += '<button onclick="retakeExam()" style="margin-top:1rem;padding:0.75rem 1.5rem;background:#2563eb;color:white;border:none;border-radius:6px;cursor:pointer;">Retake Exam</button>';
    }

    resultsDiv.innerHTML = html;
}

function retakeExam() {
    currentExam.answers = new Array(currentExam.questions.length).fill(null);
    currentExam.currentQuestion = 0;
    currentExam.submitted = false;
    document.getElementById('exam-results').style.display = 'none';
    displayExamQuestion(0);
}

function printCertificate() {
    var certContent = document.getElementById('certificate-content');
    var printWindow = window.open('', '_blank');
    printWindow.document.write('<html><head><title>Certificate</title><style>body{font-family:Arial;margin:20px}</style></head><body>' + certContent.innerHTML + '</body></html>');
    printWindow.document.close();
    printWindow.print();
}

function adminUnlockAll() {
    var courseId = window.location.pathname.split('/').pop().replace('-progressive.html', '');
    localStorage.setItem(courseId + '-progress', 'unlocked');
    alert('All modules unlocked. Reloading...');
    location.reload();
}

function adminResetProgress() {
    if (!confirm('Reset all progress?')) return;
    var courseId = window.location.pathname.split('/').pop().replace('-progressive.html', '');
    localStorage.removeItem(courseId + '-progress');
    localStorage.removeItem(courseId + '-feedback');
    localStorage.removeItem(courseId + '-completed');
    alert('Progress reset. Reloading...');
    location.reload();
}

function adminShowAnswers() {
    var html = '<h3>Exam Answer Key</h3>';
    for (var i = 0; i < courseExamQuestions.length; i++) {
        var q = courseExamQuestions[i];
        html += '<div style="margin:1rem 0;padding:1rem;background:#f0fdf4;border-radius:6px;">';
        html += '<strong>Q' + (i + 1) + ':</strong> ' + q.q + '<br>';
        html += '<strong>Answer:</strong> ' + String.fromCharCode(65 + q.a) + ') ' + q.o[q.a];
        html += '</div>';
    }

    var modal = document.createElement('div');
    modal.style.cssText = 'position:fixed;top:0;left:0;width:100%;height:100%;background:rgba(0,0,0,0.8);z-index:9999;display:flex;align-items:center;justify-content:center;';
    modal.innerHTML = '<div style="background:white;padding:2rem;border-radius:12px;max-width:800px;max-height:80vh;overflow-y:auto;">' + html + '<button onclick="this.parentElement.parentElement.remove()" style="margin-top:1rem;padding:0.75rem 1.5rem;background:#2563eb;color:white;border:none;border-radius:6px;cursor:pointer;">Close</button></div>';
    modal.onclick = function(e) { if (e.target === modal) modal.remove(); };
    document.body.appendChild(modal);
}
"##;
