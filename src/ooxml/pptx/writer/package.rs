//! Turning a [`MutablePresentation`] into an OPC package.
//!
//! A part's relationships must exist before the markup that cites them, so
//! each part is created empty, related, and only then given its XML.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template;
use chrono::Utc;
use log::debug;

use super::pres::MutablePresentation;
use super::slide::{MutableSlide, SlideLayout};

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

fn layout_uri(layout: SlideLayout) -> Result<PackURI> {
    Ok(PackURI::new(format!(
        "/ppt/slideLayouts/slideLayout{}.xml",
        layout.number()
    ))?)
}

/// Builds the part graph of one presentation.
pub(crate) struct PresentationPackager<'a> {
    pres: &'a MutablePresentation,
    package: OpcPackage,
    /// Media parts are numbered across the whole deck
    media_count: usize,
}

impl<'a> PresentationPackager<'a> {
    pub(crate) fn new(pres: &'a MutablePresentation) -> Self {
        Self {
            pres,
            package: OpcPackage::new(),
            media_count: 0,
        }
    }

    pub(crate) fn build(mut self) -> Result<OpcPackage> {
        let pres_uri = PackURI::new(PRESENTATION_URI)?;
        let core_uri = PackURI::new(CORE_PROPS_URI)?;
        let app_uri = PackURI::new(APP_PROPS_URI)?;
        self.package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        self.package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        self.package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
        let theme_uri = PackURI::new(THEME_URI)?;
        self.add_master(&master_uri, &theme_uri)?;

        // rId1 is the master, slides follow in deck order
        let mut pres_part = Part::xml(pres_uri, ct::PML_PRESENTATION_MAIN, "");
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let pres = self.pres;
        let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());
        for (index, slide) in pres.slides.iter().enumerate() {
            let slide_uri = self.add_slide(index + 1, slide)?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));
        }

        let shared = [
            (PRES_PROPS_URI, ct::PML_PRES_PROPS, rt::PRES_PROPS, template::pres_props_xml()),
            (VIEW_PROPS_URI, ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::view_props_xml()),
            (THEME_URI, ct::OFC_THEME, rt::THEME, template::theme_xml()),
            (
                TABLE_STYLES_URI,
                ct::PML_TABLE_STYLES,
                rt::TABLE_STYLES,
                template::table_styles_xml(),
            ),
        ];
        for (uri, content_type, reltype, xml) in shared {
            let uri = PackURI::new(uri)?;
            pres_part.relate_to(&uri, reltype);
            self.package.add_part(Part::xml(uri, content_type, xml))?;
        }

        pres_part.set_xml(
            self.pres
                .generate_presentation_xml(&master_rel_id, &slide_rel_ids)?,
        );
        self.package.add_part(pres_part)?;

        let core_xml = template::core_props_xml(self.pres.document_title(), Utc::now())?;
        self.package
            .add_part(Part::xml(core_uri, ct::OPC_CORE_PROPERTIES, core_xml))?;
        let app_xml = template::app_props_xml(self.pres.slide_count())?;
        self.package
            .add_part(Part::xml(app_uri, ct::OFC_EXTENDED_PROPERTIES, app_xml))?;

        debug!(
            "packaged {} slides, {} media parts, {} parts in total",
            self.pres.slide_count(),
            self.media_count,
            self.package.part_count()
        );
        Ok(self.package)
    }

    /// Slide master, its layouts and the theme. The master markup cites its
    /// layouts as rId1, rId2 in [`SlideLayout::ALL`] order and the theme last.
    fn add_master(&mut self, master_uri: &PackURI, theme_uri: &PackURI) -> Result<()> {
        let mut master = Part::xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml(),
        );
        for layout in SlideLayout::ALL {
            let uri = layout_uri(layout)?;
            master.relate_to(&uri, rt::SLIDE_LAYOUT);

            let mut part = Part::xml(uri, ct::PML_SLIDE_LAYOUT, template::slide_layout_xml(layout));
            part.relate_to(master_uri, rt::SLIDE_MASTER);
            self.package.add_part(part)?;
        }
        master.relate_to(theme_uri, rt::THEME);
        self.package.add_part(master)?;
        Ok(())
    }

    /// Slide `number` and its media. The layout is rId1, pictures follow.
    fn add_slide(&mut self, number: usize, slide: &MutableSlide) -> Result<PackURI> {
        let slide_uri = PackURI::new(format!("/ppt/slides/slide{number}.xml"))?;
        let mut part = Part::xml(slide_uri.clone(), ct::PML_SLIDE, "");
        part.relate_to(&layout_uri(slide.layout())?, rt::SLIDE_LAYOUT);

        let mut image_rel_ids = Vec::new();
        for (data, format) in slide.media() {
            self.media_count += 1;
            let media_uri = PackURI::new(format!(
                "/ppt/media/image{}.{}",
                self.media_count,
                format.extension()
            ))?;
            image_rel_ids.push(part.relate_to(&media_uri, rt::IMAGE));
            self.package
                .add_part(Part::binary(media_uri, format.mime_type(), data.to_vec()))?;
        }

        part.set_xml(slide.to_xml(&image_rel_ids)?);
        self.package.add_part(part)?;
        Ok(slide_uri)
    }
}
