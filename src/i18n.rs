//! Copy for the landing page and the contact form, one immutable record per language.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The language the switcher offers from this one.
    pub fn other(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Self::Es => &ES,
            Self::En => &EN,
        }
    }
}

pub struct Translations {
    pub nav: Navigation,
    pub hero: Hero,
    pub about: About,
    pub services: Services,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
    pub social_links: &'static [SocialLink],
}

pub struct Navigation {
    pub home: &'static str,
    pub about: &'static str,
    pub services: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_highlight: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub cta_secondary: &'static str,
    pub features: &'static [Block],
    pub stats: &'static [Stat],
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub struct About {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub mission: Block,
    pub vision: Block,
    pub history: Block,
    pub values: Values,
}

pub struct Values {
    pub title: &'static str,
    pub items: &'static [Block],
}

pub struct Block {
    pub title: &'static str,
    pub content: &'static str,
}

pub struct Services {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub items: &'static [Service],
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Projects {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub technologies: &'static str,
    pub items: &'static [Project],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub technologies: &'static [&'static str],
}

pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: ContactFormCopy,
    pub info: ContactInfo,
    pub social: &'static str,
}

pub struct ContactFormCopy {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub success_description: &'static str,
    pub error: &'static str,
    pub error_description: &'static str,
}

pub struct ContactInfo {
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub struct Footer {
    pub description: &'static str,
    pub social: &'static str,
    pub rights: &'static str,
}

/// Same profiles in every language.
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/company/codive-tech/",
    },
    SocialLink {
        name: "Facebook",
        url: "https://www.facebook.com/codivetech",
    },
    SocialLink {
        name: "Instagram",
        url: "https://www.instagram.com/codive.dev/",
    },
];

const TECHNOLOGIES: &[&str] = &[
    "PHP",
    "Laravel",
    "MySQL",
    "Bootstrap",
    "Tailwindcss",
    "JavaScript",
    "Livewire",
];

static ES: Translations = Translations {
    nav: Navigation {
        home: "Inicio",
        about: "Nosotros",
        services: "Servicios",
        projects: "Proyectos",
        contact: "Contacto",
    },
    hero: Hero {
        badge: "Desarrollo Web Profesional",
        title: "Creamos Experiencias",
        title_highlight: "Web Excepcionales",
        subtitle: "Desarrollamos sitios web modernos, responsivos y optimizados que transforman tu presencia digital y potencian tu negocio.",
        cta: "Iniciar Proyecto",
        cta_secondary: "Ver Trabajos",
        features: &[
            Block {
                title: "Desarrollo Web",
                content: "Sitios responsivos y modernos",
            },
            Block {
                title: "Diseño UX/UI",
                content: "Interfaces intuitivas y atractivas",
            },
            Block {
                title: "Optimización",
                content: "Rendimiento y SEO avanzado",
            },
        ],
        stats: &[
            Stat {
                number: "100%",
                label: "Satisfacción",
            },
            Stat {
                number: "24/7",
                label: "Soporte",
            },
        ],
    },
    about: About {
        title: "Sobre Nosotros",
        subtitle: "Conoce nuestra historia, misión y visión",
        mission: Block {
            title: "Nuestra Misión",
            content: "Transformar ideas en soluciones tecnológicas innovadoras que impulsen el crecimiento y éxito de nuestros clientes, proporcionando software de alta calidad, páginas web responsivas y aplicaciones personalizadas que superen las expectativas del mercado.",
        },
        vision: Block {
            title: "Nuestra Visión",
            content: "Ser la empresa líder en desarrollo de software a medida en la región, reconocida por nuestra excelencia técnica, innovación constante y compromiso con la satisfacción del cliente, estableciendo relaciones duraderas basadas en la confianza y resultados excepcionales.",
        },
        history: Block {
            title: "Nuestra Historia",
            content: "Codive nació de la pasión por la tecnología y el deseo de ayudar a las empresas a digitalizar sus procesos. Fundada por un equipo de desarrolladores experimentados, hemos crecido desde un pequeño estudio hasta convertirnos en una empresa reconocida por la calidad de nuestras soluciones y el compromiso con nuestros clientes.",
        },
        values: Values {
            title: "Nuestros Valores",
            items: &[
                Block {
                    title: "Innovación",
                    content: "Adoptamos las últimas tecnologías para crear soluciones vanguardistas.",
                },
                Block {
                    title: "Calidad",
                    content: "Cada proyecto es desarrollado con los más altos estándares de calidad.",
                },
                Block {
                    title: "Compromiso",
                    content: "Nos dedicamos completamente al éxito de cada proyecto y cliente.",
                },
            ],
        },
    },
    services: Services {
        title: "Nuestros Servicios",
        subtitle: "Soluciones tecnológicas completas para tu negocio",
        cta: "Solicitar Cotización",
        items: &[
            Service {
                title: "Desarrollo de Software a Medida",
                description: "Creamos aplicaciones personalizadas que se adaptan perfectamente a las necesidades específicas de tu negocio, utilizando las tecnologías más avanzadas.",
                features: &[
                    "Análisis de requerimientos",
                    "Arquitectura escalable",
                    "Integración con sistemas existentes",
                    "Soporte y mantenimiento",
                ],
            },
            Service {
                title: "Páginas Web Profesionales",
                description: "Diseñamos y desarrollamos sitios web modernos, atractivos y funcionales que representan tu marca de manera profesional en el mundo digital.",
                features: &[
                    "Diseño responsive",
                    "SEO optimizado",
                    "CMS personalizado",
                    "Integración con redes sociales",
                ],
            },
            Service {
                title: "Sistemas de Gestión",
                description: "Implementamos sistemas ERP, CRM y de gestión empresarial que automatizan procesos y mejoran la eficiencia operativa de tu organización.",
                features: &[
                    "ERP personalizado",
                    "CRM integrado",
                    "Reportes avanzados",
                    "Dashboard ejecutivo",
                ],
            },
            Service {
                title: "Diseño UI/UX",
                description: "Creamos interfaces intuitivas y experiencias de usuario excepcionales que aumentan la satisfacción del cliente y las conversiones.",
                features: &[
                    "Prototipado",
                    "Testing de usabilidad",
                    "Diseño responsive",
                    "Guías de estilo",
                ],
            },
        ],
    },
    projects: Projects {
        title: "Proyectos Destacados",
        subtitle: "Descubre algunas de nuestras soluciones web más innovadoras y exitosas",
        technologies: "Tecnologías:",
        items: &[Project {
            title: "PsicoCare - Sistema de Citas Psicológicas",
            description: "Plataforma web privada para la gestión de pacientes de una psicóloga. Permite agendar citas individuales o de pareja, mantener comunicación directa por chat y llevar el control de la evolución de cada paciente.",
            category: "Salud",
            status: "En Desarrollo",
            technologies: TECHNOLOGIES,
        }],
    },
    contact: Contact {
        title: "Contáctanos",
        subtitle: "Estamos listos para hacer realidad tu proyecto",
        form: ContactFormCopy {
            name: "Nombre completo",
            email: "Correo electrónico",
            phone: "Teléfono",
            subject: "Asunto",
            message: "Mensaje",
            send: "Enviar Mensaje",
            sending: "Enviando...",
            success: "Mensaje enviado correctamente",
            success_description: "Te contactaremos pronto.",
            error: "Error al enviar el mensaje",
            error_description: "Por favor intenta nuevamente.",
        },
        info: ContactInfo {
            title: "Información de Contacto",
            email: "codive.dev@outlook.com",
            phone: "+57 (319) 766-6683",
            address: "Ibagué, Colombia",
        },
        social: "Síguenos en Redes Sociales",
    },
    footer: Footer {
        description: "Empresa especializada en desarrollo de software a medida, páginas web y aplicaciones responsivas.",
        social: "Redes Sociales",
        rights: "Todos los derechos reservados.",
    },
    social_links: SOCIAL_LINKS,
};

static EN: Translations = Translations {
    nav: Navigation {
        home: "Home",
        about: "About",
        services: "Services",
        projects: "Projects",
        contact: "Contact",
    },
    hero: Hero {
        badge: "Professional Web Development",
        title: "We Create Exceptional",
        title_highlight: "Web Experiences",
        subtitle: "We develop modern, responsive and optimized websites that transform your digital presence and boost your business.",
        cta: "Start Project",
        cta_secondary: "View Work",
        features: &[
            Block {
                title: "Web Development",
                content: "Responsive and modern sites",
            },
            Block {
                title: "UX/UI Design",
                content: "Intuitive and attractive interfaces",
            },
            Block {
                title: "Optimization",
                content: "Advanced performance and SEO",
            },
        ],
        stats: &[
            Stat {
                number: "100%",
                label: "Satisfaction",
            },
            Stat {
                number: "24/7",
                label: "Support",
            },
        ],
    },
    about: About {
        title: "About Us",
        subtitle: "Learn about our history, mission and vision",
        mission: Block {
            title: "Our Mission",
            content: "Transform ideas into innovative technological solutions that drive the growth and success of our clients, providing high-quality software, responsive web pages and custom applications that exceed market expectations.",
        },
        vision: Block {
            title: "Our Vision",
            content: "To be the leading custom software development company in the region, recognized for our technical excellence, constant innovation and commitment to customer satisfaction, establishing lasting relationships based on trust and exceptional results.",
        },
        history: Block {
            title: "Our History",
            content: "Codive was born from a passion for technology and the desire to help companies digitize their processes. Founded by a team of experienced developers, we have grown from a small studio to become a company recognized for the quality of our solutions and commitment to our clients.",
        },
        values: Values {
            title: "Our Values",
            items: &[
                Block {
                    title: "Innovation",
                    content: "We adopt the latest technologies to create cutting-edge solutions.",
                },
                Block {
                    title: "Quality",
                    content: "Every project is developed with the highest quality standards.",
                },
                Block {
                    title: "Commitment",
                    content: "We are completely dedicated to the success of every project and client.",
                },
            ],
        },
    },
    services: Services {
        title: "Our Services",
        subtitle: "Complete technological solutions for your business",
        cta: "Request Quote",
        items: &[
            Service {
                title: "Custom Software Development",
                description: "We create personalized applications that perfectly adapt to the specific needs of your business, using the most advanced technologies.",
                features: &[
                    "Requirements analysis",
                    "Scalable architecture",
                    "Integration with existing systems",
                    "Support and maintenance",
                ],
            },
            Service {
                title: "Professional Websites",
                description: "We design and develop modern, attractive and functional websites that represent your brand professionally in the digital world.",
                features: &[
                    "Responsive design",
                    "SEO optimized",
                    "Custom CMS",
                    "Social media integration",
                ],
            },
            Service {
                title: "Management Systems",
                description: "We implement ERP, CRM and business management systems that automate processes and improve the operational efficiency of your organization.",
                features: &[
                    "Custom ERP",
                    "Integrated CRM",
                    "Advanced reports",
                    "Executive dashboard",
                ],
            },
            Service {
                title: "UI/UX Design",
                description: "We create intuitive interfaces and exceptional user experiences that increase customer satisfaction and conversions.",
                features: &[
                    "Prototyping",
                    "Usability testing",
                    "Responsive design",
                    "Style guides",
                ],
            },
        ],
    },
    projects: Projects {
        title: "Featured Projects",
        subtitle: "Discover some of our most innovative and successful web solutions",
        technologies: "Technologies:",
        items: &[Project {
            title: "PsicoCare - Psychological Appointment System",
            description: "Private web platform for a psychologist to manage her patients. It allows scheduling individual or couple sessions, direct communication through chat, and tracking each patient's progress.",
            category: "Healthcare",
            status: "In Development",
            technologies: TECHNOLOGIES,
        }],
    },
    contact: Contact {
        title: "Contact Us",
        subtitle: "We are ready to make your project a reality",
        form: ContactFormCopy {
            name: "Full name",
            email: "Email address",
            phone: "Phone",
            subject: "Subject",
            message: "Message",
            send: "Send Message",
            sending: "Sending...",
            success: "Message sent successfully",
            success_description: "We will contact you soon.",
            error: "Error sending message",
            error_description: "Please try again.",
        },
        info: ContactInfo {
            title: "Contact Information",
            email: "codive.dev@outlook.com",
            phone: "+57 (319) 766-6683",
            address: "Ibague, Colombia",
        },
        social: "Follow Us on Social Media",
    },
    footer: Footer {
        description: "Company specialized in custom software development, web pages and responsive applications.",
        social: "Social Media",
        rights: "All rights reserved.",
    },
    social_links: SOCIAL_LINKS,
};
