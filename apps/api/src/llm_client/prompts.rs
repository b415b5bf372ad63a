//! Prompt builders for the three generation endpoints. Each prompt pins the
//! exact JSON shape the caller validates against.

/// System prompt + user prompt for summary generation from the resume JSON.
pub fn summary_prompt(resume_json: &str) -> (String, String) {
    let system = "You are an assistant that writes professional resume \
                  summaries. Respond with JSON only."
        .to_string();
    let prompt = format!(
        "Based on the resume data below, write a concise professional summary \
         (50-100 words) that highlights the candidate's key skills, \
         experience, education and career goals. Use a formal, succinct tone \
         suitable for a job application, written in the first person. Avoid \
         generic filler; focus on what stands out.\n\n\
         Resume data:\n{resume_json}\n\n\
         Return the result as JSON with a \"summary\" field containing the \
         paragraph."
    );
    (system, prompt)
}

/// Prompt for evaluating a resume against a job description, producing hints.
pub fn evaluate_prompt(resume_json: &str, job_description: &str) -> (String, String) {
    let system = "You are an expert resume reviewer. Respond with JSON only.".to_string();
    let prompt = format!(
        "Evaluate the resume below against the job description and produce \
         improvement hints. Each hint must target one of these parts: \
         generalInfo, experience, education, skills, summary. A hint is either:\n\
         - \"success\": a strength of the resume that matches the job description.\n\
         - \"notice\": a suggested edit to better match the job description.\n\n\
         Return exactly this JSON shape:\n\
         {{\n  \"hints\": [\n    {{\n      \"type\": \"success\" | \"notice\",\n      \
         \"part\": \"generalInfo\" | \"experience\" | \"education\" | \"skills\" | \"summary\",\n      \
         \"content\": \"the hint text\"\n    }}\n  ]\n}}\n\
         If specific information is missing, infer reasonably and keep the \
         hints professional.\n\n\
         Job description:\n{job_description}\n\n\
         Resume:\n{resume_json}"
    );
    (system, prompt)
}

/// Prompt for extracting a structured work-experience entry from free text.
pub fn experience_prompt(description: &str) -> (String, String) {
    let system = "You are an assistant that extracts structured work \
                  experience from free text. Respond with JSON only."
        .to_string();
    let prompt = format!(
        "Analyze the work description below and extract a JSON object with \
         this structure:\n\
         {{\n  \"position\": \"job title\",\n  \"company\": \"company name\",\n  \
         \"startDate\": \"start date in yyyy-mm-dd form\",\n  \
         \"endDate\": \"end date in yyyy-mm-dd form, or omit if ongoing\",\n  \
         \"description\": \"responsibilities and achievements\"\n}}\n\
         If a field is not stated in the text, infer it with a professional \
         tone before leaving it blank.\n\n\
         Work description:\n\"{description}\""
    );
    (system, prompt)
}
