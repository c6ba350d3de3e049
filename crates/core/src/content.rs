//! The shipped three-month internship program.
//!
//! Content is declared as static source tables and converted into a validated
//! [`Curriculum`] by [`shipped_curriculum`].

use crate::model::{
    ContentError, Curriculum, DailyBlock, MiniProject, Phase, PhaseId, Resource, Week, WeekNumber,
};

struct WeekSource {
    week: u8,
    title: &'static str,
    objectives: &'static [&'static str],
    daily: &'static [(&'static str, &'static [&'static str])],
    project: (&'static str, &'static str),
    deliverables: &'static [&'static str],
    resources: &'static [(&'static str, &'static str)],
    checklist: &'static [&'static str],
}

struct PhaseSource {
    id: u8,
    name: &'static str,
    description: &'static str,
    weeks_label: &'static str,
    weeks: &'static [WeekSource],
}

/// Build the shipped curriculum.
///
/// # Errors
///
/// Returns `ContentError` if the static tables fail validation.
pub fn shipped_curriculum() -> Result<Curriculum, ContentError> {
    Curriculum::new(PROGRAM.iter().map(phase_from_source).collect())
}

fn phase_from_source(src: &PhaseSource) -> Phase {
    Phase {
        id: PhaseId::new(src.id),
        name: src.name.to_owned(),
        description: src.description.to_owned(),
        weeks_label: src.weeks_label.to_owned(),
        weeks: src.weeks.iter().map(week_from_source).collect(),
    }
}

fn week_from_source(src: &WeekSource) -> Week {
    let owned = |items: &[&str]| items.iter().map(|item| (*item).to_owned()).collect();
    Week {
        number: WeekNumber::new(src.week),
        title: src.title.to_owned(),
        objectives: owned(src.objectives),
        daily_breakdown: src
            .daily
            .iter()
            .map(|(day, tasks)| DailyBlock {
                day: (*day).to_owned(),
                tasks: owned(tasks),
            })
            .collect(),
        mini_project: MiniProject {
            name: src.project.0.to_owned(),
            description: src.project.1.to_owned(),
        },
        deliverables: owned(src.deliverables),
        resources: src
            .resources
            .iter()
            .map(|(name, url)| Resource {
                name: (*name).to_owned(),
                url: (*url).to_owned(),
            })
            .collect(),
        checklist: owned(src.checklist),
    }
}

// ─── Program tables ────────────────────────────────────────────────────────────

static PROGRAM: &[PhaseSource] = &[
    PhaseSource {
        id: 0,
        name: "Month 1: HTML & CSS Fundamentals",
        description: "Weeks 1-3: Master HTML basics, semantic markup, CSS styling, flexbox, grid, and responsive design",
        weeks_label: "Weeks 1-3",
        weeks: &[
            WeekSource {
                week: 1,
                title: "HTML Basics & Structure",
                objectives: &[
                    "Understand HTML document structure and basic elements",
                    "Learn HTML headings, paragraphs, and text formatting",
                    "Master HTML links, images, and lists",
                ],
                daily: &[
                    (
                        "Day 1-2",
                        &[
                            "HTML Introduction and Basic Structure",
                            "HTML Editors and Setup",
                            "HTML Elements, Attributes, Headings, and Paragraphs",
                            "HTML Text Formatting",
                        ],
                    ),
                    (
                        "Day 3-4",
                        &[
                            "HTML Quotation and Citation Elements",
                            "HTML Comments, Colors, Links, and Images",
                            "HTML Favicon, Tables, and Lists",
                        ],
                    ),
                    (
                        "Day 5",
                        &[
                            "HTML Block & Inline Elements",
                            "HTML Classes & IDs",
                            "HTML Iframes",
                            "HTML Forms and Form Attributes",
                        ],
                    ),
                ],
                project: (
                    "Mini Project 1: About Me Page",
                    "Create a simple 'About Me' page with headings, paragraphs, and formatted text.",
                ),
                deliverables: &[
                    "HTML file with proper document structure",
                    "Use of various HTML elements (headings, paragraphs, lists)",
                    "Images with alt text for accessibility",
                    "Simple form with proper labels",
                ],
                resources: &[
                    ("W3Schools HTML Tutorial", "https://www.w3schools.com/html/html_intro.asp"),
                    ("MDN HTML Guide", "https://developer.mozilla.org/en-US/docs/Web/HTML"),
                ],
                checklist: &[
                    "Proper DOCTYPE declaration",
                    "Valid HTML structure with head and body",
                    "Semantic use of headings",
                    "Images with descriptive alt attributes",
                    "Form with proper input labels",
                ],
            },
            WeekSource {
                week: 2,
                title: "CSS Fundamentals",
                objectives: &[
                    "Learn CSS syntax, selectors, and specificity",
                    "Master CSS colors, backgrounds, borders, margins, and padding",
                    "Understand CSS text properties and fonts",
                ],
                daily: &[
                    (
                        "Day 1-2",
                        &[
                            "CSS Introduction and Syntax",
                            "CSS Selectors and Colors",
                            "CSS Backgrounds, Borders, Margins & Padding",
                        ],
                    ),
                    (
                        "Day 3-4",
                        &[
                            "CSS Text Properties and Fonts",
                            "CSS Icons and Google Fonts",
                            "CSS Links, Lists, and Display Properties",
                        ],
                    ),
                    (
                        "Day 5",
                        &[
                            "Box Model Concept",
                            "CSS Position Property",
                            "CSS Float & Clear, Overflow, Z-index",
                        ],
                    ),
                ],
                project: (
                    "Mini Project 2: Stylish Resume Page",
                    "Create a stylish resume page using CSS for styling and layout.",
                ),
                deliverables: &[
                    "CSS file with organized styles",
                    "Styled resume with proper typography",
                    "Use of CSS box model properties",
                    "Creative layout using positioning",
                ],
                resources: &[
                    ("W3Schools CSS Tutorial", "https://www.w3schools.com/css/css_intro.asp"),
                    ("MDN CSS Basics", "https://developer.mozilla.org/en-US/docs/Learn/CSS"),
                ],
                checklist: &[
                    "CSS selectors properly used",
                    "Box model applied correctly",
                    "Typography with custom fonts",
                    "Creative use of positioning",
                    "Consistent spacing and alignment",
                ],
            },
            WeekSource {
                week: 3,
                title: "Layouts & Responsive Design",
                objectives: &[
                    "Master CSS Flexbox and Grid layouts",
                    "Implement responsive layouts with mobile-first design",
                    "Learn media queries and responsive units",
                ],
                daily: &[
                    (
                        "Day 1-2",
                        &[
                            "Flex Container & Items",
                            "Alignment & Justification",
                            "Flexbox Layout Examples",
                        ],
                    ),
                    (
                        "Day 3-4",
                        &[
                            "Grid Container and Template Areas",
                            "Responsive Grids",
                            "Grid vs Flexbox comparison",
                        ],
                    ),
                    (
                        "Day 5",
                        &[
                            "Media Queries",
                            "Mobile-First Design",
                            "Responsive Units (%, em, rem, vw, vh)",
                        ],
                    ),
                ],
                project: (
                    "Mini Project 3: Responsive Portfolio Page",
                    "Create a responsive portfolio page using Flexbox and Grid with multiple breakpoints.",
                ),
                deliverables: &[
                    "Responsive layout using Flexbox and Grid",
                    "Multiple breakpoints for different devices",
                    "Mobile-first approach implementation",
                    "Gallery or project showcase section",
                ],
                resources: &[
                    ("CSS-Tricks Flexbox Guide", "https://css-tricks.com/snippets/css/a-guide-to-flexbox/"),
                    ("CSS-Tricks Grid Guide", "https://css-tricks.com/snippets/css/complete-guide-grid/"),
                    (
                        "MDN Responsive Design",
                        "https://developer.mozilla.org/en-US/docs/Learn/CSS/CSS_layout/Responsive_Design",
                    ),
                ],
                checklist: &[
                    "Flexbox layouts implemented correctly",
                    "CSS Grid layouts working",
                    "Mobile-first approach used",
                    "At least 3 breakpoints configured",
                    "Content adapts to different screen sizes",
                ],
            },
        ],
    },
    PhaseSource {
        id: 1,
        name: "Month 2: JavaScript Mastery",
        description: "Weeks 4-6: Learn JavaScript fundamentals, DOM manipulation, and API integration",
        weeks_label: "Weeks 4-6",
        weeks: &[
            WeekSource {
                week: 4,
                title: "JavaScript Basics",
                objectives: &[
                    "Master JavaScript syntax, variables, and operators",
                    "Learn data types, functions, conditionals, and loops",
                    "Understand ES6 features like let, const, and arrow functions",
                ],
                daily: &[
                    (
                        "Day 1-2",
                        &[
                            "JS Introduction and Syntax",
                            "Variables, Operators, and Data Types",
                            "Functions and Conditionals",
                        ],
                    ),
                    (
                        "Day 3-4",
                        &[
                            "Arrays & Objects",
                            "Functions & Scope",
                            "String & Array Methods",
                            "ES6 Features (let, const, arrow functions)",
                        ],
                    ),
                    ("Day 5", &["Debugging with Chrome DevTools", "Best Coding Practices"]),
                ],
                project: (
                    "Mini Project 4: Calculator App",
                    "Build a fully functional calculator app with basic arithmetic operations.",
                ),
                deliverables: &[
                    "JavaScript file with organized functions",
                    "Calculator with basic operations (+, -, *, /)",
                    "Error handling for invalid inputs",
                    "Clean and readable code structure",
                ],
                resources: &[
                    ("W3Schools JavaScript Tutorial", "https://www.w3schools.com/js/js_intro.asp"),
                    ("JavaScript.info", "https://javascript.info/"),
                ],
                checklist: &[
                    "Variables properly declared with let/const",
                    "Functions for each operation",
                    "Error handling for edge cases",
                    "Clean and readable code",
                    "Calculator functions as expected",
                ],
            },
            WeekSource {
                week: 5,
                title: "DOM & Event Handling",
                objectives: &[
                    "Master DOM manipulation and event handling",
                    "Learn form validation and local storage",
                    "Understand event listeners and delegation",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "DOM Manipulation and Selecting Elements",
                        "Event Listeners and Event Object",
                        "Form Validation",
                        "Local Storage",
                        "Event Delegation",
                    ],
                )],
                project: (
                    "Mini Project 5: To-Do App with Dark Mode",
                    "Create a to-do application with add/delete tasks functionality and dark mode toggle.",
                ),
                deliverables: &[
                    "To-do app with add/remove tasks",
                    "Dark mode toggle feature",
                    "Data persistence with localStorage",
                    "Form validation for inputs",
                ],
                resources: &[
                    (
                        "MDN DOM Manipulation",
                        "https://developer.mozilla.org/en-US/docs/Web/API/Document_Object_Model",
                    ),
                    ("JavaScript.info Events", "https://javascript.info/events"),
                ],
                checklist: &[
                    "DOM selection and manipulation working",
                    "Event listeners properly attached",
                    "Form validation implemented",
                    "localStorage for data persistence",
                    "Dark mode toggle functional",
                ],
            },
            WeekSource {
                week: 6,
                title: "APIs & Advanced JavaScript",
                objectives: &[
                    "Learn Fetch API and JSON handling",
                    "Master async/await and error handling",
                    "Understand ES6 modules and API integration",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "Fetch API & JSON",
                        "Async/Await",
                        "Error Handling",
                        "ES6 Modules",
                        "API Integration",
                    ],
                )],
                project: (
                    "Mini Project 6: Weather App & GitHub User Finder",
                    "Build a weather app using OpenWeather API and a GitHub user finder using GitHub API.",
                ),
                deliverables: &[
                    "Weather app with current conditions display",
                    "GitHub user finder with profile information",
                    "Loading states and error handling",
                    "Async/await for API calls",
                ],
                resources: &[
                    ("MDN Fetch API", "https://developer.mozilla.org/en-US/docs/Web/API/Fetch_API"),
                    ("JavaScript.info Async", "https://javascript.info/async"),
                ],
                checklist: &[
                    "API data fetching working",
                    "Error handling for failed requests",
                    "Loading states display correctly",
                    "Async/await used appropriately",
                    "Data displayed in user-friendly format",
                ],
            },
        ],
    },
    PhaseSource {
        id: 2,
        name: "Month 3: React Development",
        description: "Weeks 7-13: Learn React fundamentals, hooks, routing, and build a capstone project",
        weeks_label: "Weeks 7-13",
        weeks: &[
            WeekSource {
                week: 7,
                title: "React Fundamentals",
                objectives: &[
                    "Learn React components and JSX syntax",
                    "Master props and state management with useState",
                    "Understand component composition",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "React Intro and Components",
                        "JSX Syntax",
                        "Props and State (useState Hook)",
                        "Component Composition",
                    ],
                )],
                project: (
                    "Mini Project 7: Counter App & Color Switcher",
                    "Build a counter application and a color switcher component using React hooks.",
                ),
                deliverables: &[
                    "Counter app with increment/decrement functionality",
                    "Color switcher with multiple theme options",
                    "Reusable React components",
                    "State management with useState",
                ],
                resources: &[
                    ("React Docs", "https://react.dev/learn"),
                    ("React Hooks", "https://react.dev/reference/react/hooks"),
                ],
                checklist: &[
                    "Components are functional and reusable",
                    "Props passed correctly between components",
                    "State managed with useState hook",
                    "Components update correctly on state change",
                    "Clean and organized code structure",
                ],
            },
            WeekSource {
                week: 8,
                title: "React Hooks & Routing",
                objectives: &[
                    "Master useEffect and custom hooks",
                    "Learn React Router for multi-page applications",
                    "Understand useEffect dependencies and cleanup",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "useEffect Hook and Side Effects",
                        "Custom Hooks Creation",
                        "React Router (v6+)",
                        "useReducer and useContext",
                    ],
                )],
                project: (
                    "Mini Project 8: Movie Search App & Recipe Finder",
                    "Create a movie search app using OMDb API and a recipe finder app with routing.",
                ),
                deliverables: &[
                    "Movie search with API integration",
                    "Recipe finder with multiple pages",
                    "Routing between different views",
                    "Custom hooks for data fetching",
                ],
                resources: &[
                    ("React Router", "https://reactrouter.com/"),
                    ("React useEffect", "https://react.dev/reference/react/useEffect"),
                ],
                checklist: &[
                    "useEffect for managing side effects",
                    "Custom hooks for reusable logic",
                    "React Router for navigation",
                    "Components properly mounted/unmounted",
                    "API data displayed correctly",
                ],
            },
            WeekSource {
                week: 9,
                title: "Forms, APIs & State Management",
                objectives: &[
                    "Learn controlled inputs and form validation",
                    "Master Context API for state management",
                    "Understand data fetching and custom hooks",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "Controlled Inputs and Form Validation",
                        "Context API",
                        "Fetching APIs",
                        "Custom Hooks",
                        "State Management Patterns",
                    ],
                )],
                project: (
                    "Mini Project 9: User Registration & Expense Tracker",
                    "Build a user registration form with validation and an expense tracker application.",
                ),
                deliverables: &[
                    "Registration form with validation",
                    "Expense tracker with add/remove functionality",
                    "Context API for state management",
                    "Form data handling and validation",
                ],
                resources: &[
                    ("React Forms", "https://react.dev/reference/react-dom/components/form"),
                    ("React Context", "https://react.dev/learn/passing-data-deeply-with-context"),
                ],
                checklist: &[
                    "Controlled components for forms",
                    "Validation for user inputs",
                    "Context API for state sharing",
                    "Custom hooks for data management",
                    "Forms submit and display data correctly",
                ],
            },
            WeekSource {
                week: 10,
                title: "Advanced React & UI Libraries",
                objectives: &[
                    "Learn UI libraries like Tailwind CSS",
                    "Understand performance optimization techniques",
                    "Master React.memo and lazy loading",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "UI Libraries (Tailwind CSS)",
                        "Performance Optimization (React.memo)",
                        "Lazy Loading and Code Splitting",
                        "Component Optimization Techniques",
                    ],
                )],
                project: (
                    "Mini Project 10: Dashboard UI",
                    "Create a responsive dashboard UI with multiple components and optimized performance.",
                ),
                deliverables: &[
                    "Dashboard with multiple UI components",
                    "Performance optimized with React.memo",
                    "Lazy loading for components",
                    "Responsive design for all devices",
                ],
                resources: &[
                    ("Tailwind CSS", "https://tailwindcss.com/"),
                    ("React Performance", "https://react.dev/reference/react/memo"),
                ],
                checklist: &[
                    "UI components properly styled",
                    "React.memo used for optimization",
                    "Lazy loading implemented",
                    "Responsive across all breakpoints",
                    "Performance metrics improved",
                ],
            },
            WeekSource {
                week: 11,
                title: "Testing & Deployment",
                objectives: &[
                    "Learn testing with Jest and React Testing Library",
                    "Understand deployment processes",
                    "Master testing best practices",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "Testing (Jest + React Testing Library)",
                        "Unit Testing Components",
                        "Integration Testing",
                        "Deployment (Vercel/Netlify)",
                        "CI/CD Basics",
                    ],
                )],
                project: (
                    "Mini Project 11: React Portfolio",
                    "Build a personal portfolio with testing coverage and deploy to Vercel or Netlify.",
                ),
                deliverables: &[
                    "Portfolio with multiple sections",
                    "Unit tests with Jest",
                    "Component tests with Testing Library",
                    "Deployed application with URL",
                ],
                resources: &[
                    ("Jest Testing", "https://jestjs.io/"),
                    (
                        "React Testing Library",
                        "https://testing-library.com/docs/react-testing-library/intro/",
                    ),
                    ("Vercel Deployment", "https://vercel.com/"),
                ],
                checklist: &[
                    "Unit tests written and passing",
                    "Component tests implemented",
                    "Test coverage metrics met",
                    "Application deployed successfully",
                    "Deployment URL accessible",
                ],
            },
            WeekSource {
                week: 12,
                title: "Capstone Project",
                objectives: &[
                    "Complete a full-featured capstone project",
                    "Apply all learned concepts in a real-world application",
                    "Prepare professional presentation",
                ],
                daily: &[(
                    "Days 1-5",
                    &[
                        "Project Planning and Scope Definition",
                        "Implementation of Core Features",
                        "Testing and Refinement",
                        "Deployment and Presentation Preparation",
                        "Documentation and Demo",
                    ],
                )],
                project: (
                    "Capstone Project: E-commerce Website",
                    "Build a full-featured e-commerce website with product listings, cart functionality, and checkout process.",
                ),
                deliverables: &[
                    "Full-featured e-commerce application",
                    "Responsive UI with modern design",
                    "Product listing and cart functionality",
                    "Checkout process with form validation",
                    "Deployed application with presentation",
                ],
                resources: &[
                    ("Project Planning", "https://www.atlassian.com/team-playbook/planning"),
                    ("Deployment Best Practices", "https://12factor.net/"),
                ],
                checklist: &[
                    "Project scope clearly defined",
                    "All core features implemented",
                    "Responsive design across devices",
                    "Application deployed and accessible",
                    "Presentation prepared and practiced",
                ],
            },
            WeekSource {
                week: 13,
                title: "AI Tools for Developer Productivity",
                objectives: &[
                    "Learn to use AI coding assistants responsibly",
                    "Understand how to improve productivity with AI tools",
                    "Practice using AI for code generation and debugging",
                    "Recognize the limitations and ethical considerations of AI",
                ],
                daily: &[
                    (
                        "Day 1",
                        &[
                            "Introduction to AI Coding Assistants",
                            "Setting up Cursor/Claude/ChatGPT for development",
                            "Understanding responsible AI usage",
                            "Ethical considerations in AI-assisted development",
                        ],
                    ),
                    (
                        "Day 2",
                        &[
                            "Using AI for code explanation and documentation",
                            "Generating boilerplate code with AI",
                            "Code refactoring suggestions",
                            "Best practices for prompting AI",
                        ],
                    ),
                    (
                        "Day 3",
                        &[
                            "AI-assisted debugging techniques",
                            "Using AI for error analysis",
                            "Performance optimization suggestions",
                            "Security considerations with AI-generated code",
                        ],
                    ),
                    (
                        "Day 4",
                        &[
                            "AI for learning new technologies",
                            "Researching solutions with AI",
                            "Code review and improvement suggestions",
                            "Balancing AI assistance with independent problem-solving",
                        ],
                    ),
                    (
                        "Day 5",
                        &[
                            "Final project: Enhancing your capstone with AI tools",
                            "Creating a personal AI workflow",
                            "Documenting your AI usage experience",
                            "Preparing for AI-integrated development in industry",
                        ],
                    ),
                ],
                project: (
                    "AI-Enhanced Developer Workflow",
                    "Create a personal development workflow that incorporates AI tools for code generation, debugging, and learning while maintaining critical thinking and problem-solving skills.",
                ),
                deliverables: &[
                    "Documented AI workflow for development tasks",
                    "Comparison of different AI tools (Cursor, Claude, ChatGPT)",
                    "Enhanced capstone project using AI responsibly",
                    "Reflection on AI usage in development",
                    "Best practices guide for responsible AI usage",
                ],
                resources: &[
                    ("Cursor Documentation", "https://cursor.sh/docs"),
                    ("OpenAI API Guide", "https://platform.openai.com/docs"),
                    ("Anthropic Claude Documentation", "https://docs.anthropic.com/"),
                    ("Responsible AI in Software Development", "https://ai.google/responsibilities/"),
                ],
                checklist: &[
                    "Understands when and how to use AI responsibly",
                    "Can explain limitations of AI-generated code",
                    "Maintains critical thinking and problem-solving skills",
                    "Documents AI usage appropriately",
                    "Balances AI assistance with independent work",
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChecklistKey;

    #[test]
    fn shipped_content_validates() {
        let curriculum = shipped_curriculum().expect("shipped content is valid");
        assert_eq!(curriculum.phases().len(), 3);
        assert_eq!(curriculum.week_count(), 13);
    }

    #[test]
    fn shipped_content_totals_sixty_five_items() {
        let curriculum = shipped_curriculum().unwrap();
        assert_eq!(curriculum.total_checklist_items(), 65);
        for key in curriculum.checklist_keys() {
            assert_eq!(curriculum.checklist_len(key), Some(5), "{key}");
        }
    }

    #[test]
    fn weeks_are_grouped_by_month() {
        let curriculum = shipped_curriculum().unwrap();
        let weeks_of = |phase: u8| -> Vec<u8> {
            curriculum
                .phase(PhaseId::new(phase))
                .unwrap()
                .weeks
                .iter()
                .map(|week| week.number.value())
                .collect()
        };
        assert_eq!(weeks_of(0), vec![1, 2, 3]);
        assert_eq!(weeks_of(1), vec![4, 5, 6]);
        assert_eq!(weeks_of(2), (7..=13).collect::<Vec<_>>());
    }

    #[test]
    fn first_week_key_matches_storage_layout() {
        let curriculum = shipped_curriculum().unwrap();
        let first = curriculum.checklist_keys().next().unwrap();
        assert_eq!(first, ChecklistKey::new(PhaseId::new(0), WeekNumber::new(1)));
        assert_eq!(first.to_string(), "checklist-0-1");
    }
}
