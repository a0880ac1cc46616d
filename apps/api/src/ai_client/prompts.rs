// Shared prompt constants and prompt-building utilities.
// Each guidance feature builds its own prompt from these fragments; the
// client itself stays prompt-agnostic.

/// System prompt for the mentor chat persona.
pub const MENTOR_SYSTEM: &str = "\
    You are a friendly, encouraging, and knowledgeable Career Counselor for Indian students \
    (Class 8 to 12). Your tone should be professional but accessible, like a supportive mentor.\n\
    \n\
    Key Context for India:\n\
    - Education System: Familiar with CBSE, ICSE, State Boards, NIOS.\n\
    - Streams: Science (PCM/PCB), Commerce, Arts/Humanities, and Vocational.\n\
    - Entrance Exams: JEE, NEET, UPSC, CA Foundation, CLAT, NID, CUET, NDA, CET, ITI Entrance.\n\
    - Degrees: B.Tech, MBBS, B.Com, BA, B.Des, LLB, ITI Certificates, Diplomas (Polytechnic).\n\
    - Culture: Respectful, understanding parental pressure but encouraging student passion.\n\
    \n\
    If a student asks about Vocational or ITI courses (Electrician, Plumber, etc.), respect \
    them as high-skill trades and provide dignified, accurate pathways.\n\
    \n\
    Provide clear, actionable advice. Break down complex topics into simple steps. \
    Use bullet points for lists.";

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Pathway generation prompt. Placeholders: {career_title}, {grade},
/// {strength}, {interests}.
pub const PATHWAY_PROMPT_TEMPLATE: &str = "\
    Create a personalized structured career pathway for an Indian student wanting to become \
    a {career_title}.\n\
    Student Profile:\n\
    - Current Grade: {grade}\n\
    - Strength: {strength}\n\
    - Interests: {interests}\n\
    \n\
    Tailor the milestones to this profile, suggesting specific actions relevant to their \
    strengths.\n\
    Include Indian entrance exams (e.g., JEE, NEET, CAT, UPSC, CLAT, NID, ITI/Polytechnic \
    Exams) where applicable.\n\
    Mention standard Indian degrees/certificates (B.Tech, MBBS, B.Com, ITI, Diploma) and top \
    Indian institutions (IITs, IIMs, AIIMS, NIFTs, NLUs, ITIs) if relevant.\n\
    \n\
    Return a JSON object with keys:\n\
    - milestones: array of {\"stage\": string, \"actions\": array of string}\n\
    - recommendedDegrees: array of string\n\
    - topSkills: array of string";

/// Project idea generation. Placeholders: {interest}, {grade}.
pub const PROJECTS_PROMPT_TEMPLATE: &str = "\
    Suggest 3 impressive, hands-on portfolio projects for an Indian school student \
    (Grade: {grade}) interested in {interest}.\n\
    Return a raw JSON array (NO MARKDOWN) where each object has these keys:\n\
    - title (string)\n\
    - difficulty (Beginner/Intermediate/Advanced)\n\
    - description (string)\n\
    - skillsGained (array of strings)";

/// Live news digest. Placeholder: {date}.
pub const NEWS_PROMPT_TEMPLATE: &str = "\
    Find the latest live news and updates (As of {date}) regarding:\n\
    1. Indian Entrance Tests (JEE, NEET, CUET, UPSC, etc.) - Latest announcements, admit \
    cards, or results.\n\
    2. Scholarship News (Government & Private) - New openings or deadlines.\n\
    3. Job Market, Career Business, and Professional Trends impacting students in India.\n\
    \n\
    Provide a \"Live Hourly Update\" style summary.\n\
    List 3-5 distinct, important updates.\n\
    Focus on breaking news, deadlines, and actionable info.\n\
    Keep the tone professional, informative, and urgent/fresh for students.";

/// Live scholarship discovery. Placeholder: {month_year}.
pub const SCHOLARSHIPS_PROMPT_TEMPLATE: &str = "\
    Search for the latest active scholarships in India for school and college students \
    available in {month_year}.\n\
    Find at least 3 distinct, currently active scholarships.\n\
    Return a raw JSON array (NO MARKDOWN) with objects containing:\n\
    - id (string, generate a random ID starting with NEW)\n\
    - name (string)\n\
    - category (one of: 'Central', 'State', 'Private', 'Exam')\n\
    - country (string, usually 'India')\n\
    - amount (string, e.g. \"₹50,000/yr\")\n\
    - deadline (string)\n\
    - eligibility (string, short summary)\n\
    - link (string, URL to apply)\n\
    \n\
    Ensure the response is a valid JSON array only.";
