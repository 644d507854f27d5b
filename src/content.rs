pub const OUR_WORK: &[&str] = &[
    "VMP provides advisory services in structuring and arranging investment capital.",
    "We are an advisory company (as opposed to agents, intermediaries). We go deep into client’s financing needs, help to understand, refine goals, capital requirements, then structure and arrange capital. We lead negotiations with investors, financiers on behalf of and in the best interest of our clients.",
    "We cover all types of financing from equity to mezzanine to senior debt.",
    "We work globally with focus on Europe.",
    "We do not exclude any sectors, except World Bank’s black list.",
    "We have contacts to and working co-operation with many sources of capital coming from all corners of the world: banking and non-banking debt providers, PE and VC funds, family houses, investment banks, private investors, asset managers, developers, in particular those with focus on renewable energy.",
];

pub const TRACK_STATS: &[&str] = &["20+ years of experience", "30+ countries"];

pub const FUND_MANAGEMENT: &[&str] = &[
    "EUR 280m investment management in 14 countries of CEE, equity, mezz, debt capital. Fund was successfully exited with positive returns – see: www.ifu.dk",
    "Co-founded and managed EUR XXm closed-end-fund in Poland to invest in PV energy – fund was exited and closed with positive returns. The fund used to operate as part of a Polish TFI, see: https://www.eitfi.pl/aktualnosci/czyste-zyski-z-zielonej-energii-eques-fotowoltaica-fiz-rozlicza-sie-z-inwestorami-2904 and https://www.eitfi.pl/",
];

pub const ARRANGING_FINANCING: &[&str] = &[
    "EUR XXm early stage risk capital for Al-Rajef wind power plant in Jordan, see: https://alcazarenegy.com/alcazar-energys-al-rajef-wind-farm-arwf-achieves-cod/",
    "Arranged EUR XXm in risk capital for water desalination start-up in Italy, see: https://en.solarisaquae.com/",
    "Arranged EUR XXm refinancing for Hungarian animal and plant crop producer DFH Kft, see: https://www.firstfarms.dk/en/",
    "For our track record in cooperation with other advisors see also www.traficonadvisors.eu and www.cratone.com",
];

/// A partner line: optional lead-in, optional link, trailing description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkPartner {
    pub prefix: &'static str,
    pub link: Option<(&'static str, &'static str)>,
    pub suffix: &'static str,
}

pub const NETWORK_PARTNERS: &[NetworkPartner] = &[
    NetworkPartner {
        prefix: "",
        link: Some(("www.traficonadvisors.eu", "http://www.traficonadvisors.eu")),
        suffix: " for Czech Republic, Slovakia, Austria, Germany",
    },
    NetworkPartner {
        prefix: "",
        link: Some(("www.cratone.com", "http://cratone.com")),
        suffix: " for Turkey, Middle East, Southern Europe, Africa",
    },
    NetworkPartner {
        prefix: "For investments in developing countries we have excellent contacts to EDFIs, see: ",
        link: Some(("https://www.edfi.eu/", "https://www.edfi.eu/")),
        suffix: "",
    },
    NetworkPartner {
        prefix: "",
        link: None,
        suffix: "We co-operate with a network of senior financial advisors and investment bankers across Europe, including Scandinavia, with access to global financing sources.",
    },
    NetworkPartner {
        prefix: "",
        link: None,
        suffix: "We have access and working cooperation with numerous renewable energy developers, investors, assets managers",
    },
];

pub const LOGO_URL: &str = "https://static.wixstatic.com/media/d1d5a8_08568fcaa5e84997a2cecb529d7d50fa~mv2.png/v1/fill/w_130,h_43,al_c,lg_1,q_85,enc_avif,quality_auto/logo_edited.png";
pub const HERO_BACKGROUND: &str = "https://static.wixstatic.com/media/11062b_45b4e283adc345e1a26711ade25c7908~mv2.jpg";
/// Served from `public/` by Trunk.
pub const TRACK_BACKGROUND: &str = "/wind.png";
pub const CONTACT_BACKGROUND: &str = "/solar-farm.png";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/piotr-lemieszek-4130952/";
pub const LINKEDIN_ICON: &str = "https://static.wixstatic.com/media/6ea5b4a88f0b4f91945b40499aa0af00.png/v1/fill/w_20,h_20,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/6ea5b4a88f0b4f91945b40499aa0af00.png";

/// Anchors shown in the header, in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About Us"),
    ("#services", "Services"),
    ("#track", "Track Record"),
    ("#network", "Our Network"),
    ("#contact", "Contact"),
];
