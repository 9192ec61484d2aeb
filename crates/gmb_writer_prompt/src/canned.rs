//! Canned example content shown when no API key is configured or the API
//! call fails.
//!
//! Texts are templates over the same field schema as the prompts. Every
//! variant and every question/answer is its own template, so business fields
//! never need to be split back out of rendered text.

use crate::{Template, TemplateContext};
use gmb_writer_core::{ContentBody, ContentKind, GenerationRequest, Language, PostKind, QaPair, Tone};
use gmb_writer_error::GmbResult;

/// Unparsed canned content, shaped like the body it renders to.
pub(crate) enum CannedSource {
    Variants(&'static [&'static str]),
    Text(&'static str),
    Pairs(&'static [(&'static str, &'static str)]),
}

/// Validated canned content.
#[derive(Debug, Clone)]
pub(crate) enum CannedTemplate {
    Variants(Vec<Template>),
    Text(Template),
    Pairs(Vec<(Template, Template)>),
}

impl CannedTemplate {
    pub(crate) fn parse(id: &str, source: &CannedSource) -> GmbResult<Self> {
        Ok(match source {
            CannedSource::Variants(variants) => Self::Variants(
                variants
                    .iter()
                    .enumerate()
                    .map(|(i, variant)| Template::parse(format!("{id}#{i}"), variant))
                    .collect::<GmbResult<_>>()?,
            ),
            CannedSource::Text(text) => Self::Text(Template::parse(id, text)?),
            CannedSource::Pairs(pairs) => Self::Pairs(
                pairs
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| -> GmbResult<(Template, Template)> {
                        Ok((
                            Template::parse(format!("{id}#{i}.question"), question)?,
                            Template::parse(format!("{id}#{i}.answer"), answer)?,
                        ))
                    })
                    .collect::<GmbResult<_>>()?,
            ),
        })
    }

    pub(crate) fn render(&self, context: &TemplateContext<'_>) -> ContentBody {
        match self {
            Self::Variants(variants) => ContentBody::Variants(
                variants.iter().map(|variant| variant.render(context)).collect(),
            ),
            Self::Text(text) => ContentBody::Text(text.render(context)),
            Self::Pairs(pairs) => ContentBody::QuestionsAndAnswers(
                pairs
                    .iter()
                    .map(|(question, answer)| {
                        QaPair::new(question.render(context), answer.render(context))
                    })
                    .collect(),
            ),
        }
    }
}

/// Template id for the canned content matching `request`.
///
/// Portuguese posts vary by tone for updates and offers; everything else
/// varies by content, post or review kind and language only.
pub(crate) fn canned_id(request: &GenerationRequest) -> String {
    let language = request.language.code();
    match &request.content {
        ContentKind::Post { kind } => {
            let variant = match (request.language, kind, request.tone) {
                (Language::PtBr, PostKind::Update, Tone::Friendly) => "update.friendly",
                (Language::PtBr, PostKind::Update, Tone::Promotional) => "update.promotional",
                (Language::PtBr, PostKind::Offer, Tone::Promotional) => "offer.promotional",
                (_, PostKind::Update, _) => "update",
                (_, PostKind::Offer, _) => "offer",
                (_, PostKind::Event, _) => "event",
            };
            format!("post.{variant}.{language}")
        }
        ContentKind::Description { .. } => format!("description.{language}"),
        ContentKind::ReviewReply { review_kind, .. } => {
            format!("review-reply.{review_kind}.{language}")
        }
        ContentKind::Qa { .. } => format!("qa.{language}"),
    }
}

pub(crate) const CANNED_SOURCES: &[(&str, CannedSource)] = &[
    // Posts, Portuguese
    (
        "post.update.friendly.pt-BR",
        CannedSource::Variants(&[
            "🌟 Olá, comunidade incrível!\n\nNo {{business_name}}, somos muito mais do que seu {{category}} diário, somos seu ponto de encontro local onde todo mundo sabe o seu nome! Nossos corredores estão cheios de produtos de qualidade a preços que farão você sorrir. Venha dar uma olhada nas surpresas que temos para você hoje!\n\n📍 Localizado em {{address}}. Não podemos esperar para recebê-lo(a)! 😊 #ShopLocal",
            "👋 Olá, queridos vizinhos!\n\nNo {{business_name}}, tudo é sobre unir nossa comunidade através de produtos fantásticos e uma experiência de compra calorosa. Temos tudo o que você precisa sob um mesmo teto e uma equipe amigável pronta para ajudá-lo(a) com um sorriso.\n\n📍 Visite-nos em {{address}}. Estamos ansiosos para te ver em breve! 😊 #CommunityLove",
        ]),
    ),
    (
        "post.update.promotional.pt-BR",
        CannedSource::Variants(&[
            "✨ NOVIDADES NO {{business_name_upper}} ✨\n\nAcabamos de renovar nossa loja para oferecer a melhor experiência em {{category}}! Novos produtos, ambiente renovado e o mesmo atendimento de qualidade que você já conhece. Venha conferir todas as mudanças que fizemos pensando em você!\n\n📍 {{address}} | Esperamos sua visita! 🛍️",
            "🚨 ATENÇÃO CLIENTES DO {{business_name_upper}} 🚨\n\nTemos muitas novidades para compartilhar! Nosso {{category}} está com produtos novos em todas as seções, e nossos colaboradores estão prontos para te ajudar a encontrar tudo o que você precisa.\n\n📍 Estamos localizados em {{address}}. Te esperamos! 💯",
        ]),
    ),
    (
        "post.update.pt-BR",
        CannedSource::Variants(&[
            "🌟 Olá a todos!\n\nNo {{business_name}}, estamos sempre buscando trazer o melhor para nossos clientes. Como seu {{category}} de confiança, temos orgulho de oferecer produtos e serviços de qualidade. Venha nos visitar e descubra por que somos referência na região!\n\n📍 {{address}} | Aguardamos sua visita! 😊",
            "👋 Olá comunidade!\n\nO {{business_name}} está sempre se renovando para melhor atender você. Temos novidades chegando toda semana para garantir que nosso {{category}} sempre ofereça a melhor experiência.\n\n📍 Venha nos visitar em {{address}}. Será um prazer recebê-lo! 🌻",
        ]),
    ),
    (
        "post.offer.promotional.pt-BR",
        CannedSource::Variants(&[
            "🔥 PROMOÇÃO IMPERDÍVEL NO {{business_name_upper}} 🔥\n\n30% DE DESCONTO em produtos selecionados! É a sua chance de economizar enquanto aproveita o melhor que nosso {{category}} tem a oferecer. Promoção válida somente esta semana, não perca tempo!\n\n📍 {{address}} | ⏰ Corra, é por tempo limitado!",
            "💰 ECONOMIA GARANTIDA NO {{business_name_upper}} 💰\n\nCOMPRE 1 LEVE 2 em itens selecionados! Isso mesmo, você leu certo. É a chance perfeita para conhecer nosso {{category}} e sair com mais produtos pagando menos. Promoção válida enquanto durarem os estoques.\n\n📍 {{address}} | ⚡ Não deixe para depois!",
        ]),
    ),
    (
        "post.offer.pt-BR",
        CannedSource::Variants(&[
            "🎁 Oferta especial para nossos clientes!\n\nO {{business_name}} está com uma promoção exclusiva esta semana! Venha conferir descontos de até 20% em produtos selecionados do nosso {{category}}. É nossa forma de agradecer pela sua preferência.\n\n📍 {{address}} | Oferta válida enquanto durarem os estoques.",
            "💫 Descontos especiais no {{business_name}}!\n\nPrepare-se para economizar! Estamos com ofertas em diversos produtos do nosso {{category}}. Não perca esta oportunidade de adquirir o que você precisa com preços imbatíveis.\n\n📍 Visite-nos em {{address}} e aproveite!",
        ]),
    ),
    (
        "post.event.pt-BR",
        CannedSource::Variants(&[
            "🎉 EVENTO ESPECIAL NO {{business_name_upper}} 🎉\n\nTemos o prazer de convidar você para nosso workshop gratuito sobre \"{{category}}\" neste sábado às 15h! Venha aprender com especialistas e ainda participe do sorteio de brindes exclusivos.\n\n📍 {{address}} | 📝 Vagas limitadas! Confirme sua presença pelo telefone.",
            "✨ SAVE THE DATE ✨\n\nO {{business_name}} apresenta: Feira de {{category}}, um evento imperdível para toda a família! Teremos demonstrações, degustações e atividades para crianças. Entrada gratuita!\n\nQuando: Próximo domingo, das 10h às 18h\nOnde: {{address}}\n\nTraga seus amigos e familiares! 🌟",
        ]),
    ),
    // Posts, English
    (
        "post.update.en-US",
        CannedSource::Variants(&[
            "✨ Hello wonderful community!\n\nAt {{business_name}}, we're more than just your daily {{category}}, we're your local meeting point where everyone knows your name! Our aisles are full of quality products at prices that'll make you smile. Come take a look at the surprises we have for you today!\n\n📍 Located at {{address}}. We can't wait to welcome you! 😊 #ShopLocal",
            "👋 Hello, dear neighbors!\n\nAt {{business_name}}, it's all about bringing our community together through fantastic products and a warm shopping experience. We have everything you need under one roof and a friendly team ready to help you with a smile.\n\n📍 Visit us at {{address}}. We look forward to seeing you soon! 😊 #CommunityLove",
        ]),
    ),
    (
        "post.offer.en-US",
        CannedSource::Variants(&[
            "🔥 UNMISSABLE PROMOTION AT {{business_name_upper}} 🔥\n\n30% OFF on selected products! It's your chance to save while enjoying the best that our {{category}} has to offer. Promotion valid only this week, don't waste time!\n\n📍 {{address}} | ⏰ Hurry, it's for a limited time!",
            "💰 GUARANTEED SAVINGS AT {{business_name_upper}} 💰\n\nBUY 1 GET 2 on selected items! That's right, you read it correctly. It's the perfect chance to visit our {{category}} and leave with more products paying less. Promotion valid while supplies last.\n\n📍 {{address}} | ⚡ Don't leave it for later!",
        ]),
    ),
    (
        "post.event.en-US",
        CannedSource::Variants(&[
            "🎉 SPECIAL EVENT AT {{business_name_upper}} 🎉\n\nWe're pleased to invite you to our free workshop on \"{{category}}\" this Saturday at 3pm! Come learn from experts and take part in the raffle for exclusive gifts.\n\n📍 {{address}} | 📝 Limited spots! Confirm your attendance by phone.",
            "✨ SAVE THE DATE ✨\n\n{{business_name}} presents: {{category}} Fair, an unmissable event for the whole family! We'll have demonstrations, tastings, and activities for children. Free entry!\n\nWhen: Next Sunday, from 10am to 6pm\nWhere: {{address}}\n\nBring your friends and family! 🌟",
        ]),
    ),
    // Posts, Spanish
    (
        "post.update.es-ES",
        CannedSource::Variants(&[
            "✨ ¡Hola maravillosa comunidad!\n\nEn {{business_name}}, somos más que su {{category}} diario, ¡somos su punto de encuentro local donde todos conocen su nombre! Nuestros pasillos están llenos de productos de calidad a precios que te harán sonreír. ¡Ven a ver las sorpresas que tenemos para ti hoy!\n\n📍 Ubicado en {{address}}. ¡No podemos esperar para recibirte! 😊 #ComercioLocal",
            "👋 ¡Hola, queridos vecinos!\n\nEn {{business_name}}, todo se trata de unir a nuestra comunidad a través de productos fantásticos y una cálida experiencia de compra. Tenemos todo lo que necesitas bajo un mismo techo y un equipo amigable listo para ayudarte con una sonrisa.\n\n📍 Visítanos en {{address}}. ¡Esperamos verte pronto! 😊 #AmorComunitario",
        ]),
    ),
    (
        "post.offer.es-ES",
        CannedSource::Variants(&[
            "🔥 ¡PROMOCIÓN IMPERDIBLE EN {{business_name_upper}}! 🔥\n\n¡30% DE DESCUENTO en productos seleccionados! Es tu oportunidad de ahorrar mientras disfrutas de lo mejor que nuestro {{category}} tiene para ofrecer. ¡Promoción válida solo esta semana, no pierdas tiempo!\n\n📍 {{address}} | ⏰ ¡Apúrate, es por tiempo limitado!",
            "💰 AHORRO GARANTIZADO EN {{business_name_upper}} 💰\n\n¡COMPRA 1 LLEVA 2 en artículos seleccionados! Así es, leíste bien. Es la oportunidad perfecta para conocer nuestro {{category}} y salir con más productos pagando menos. Promoción válida hasta agotar existencias.\n\n📍 {{address}} | ⚡ ¡No lo dejes para después!",
        ]),
    ),
    (
        "post.event.es-ES",
        CannedSource::Variants(&[
            "🎉 EVENTO ESPECIAL EN {{business_name_upper}} 🎉\n\n¡Tenemos el placer de invitarte a nuestro taller gratuito sobre \"{{category}}\" este sábado a las 15h! Ven a aprender con expertos y participa en el sorteo de regalos exclusivos.\n\n📍 {{address}} | 📝 ¡Plazas limitadas! Confirma tu asistencia por teléfono.",
            "✨ ¡RESERVA LA FECHA! ✨\n\n{{business_name}} presenta: Feria de {{category}}, ¡un evento imperdible para toda la familia! Tendremos demostraciones, degustaciones y actividades para niños. ¡Entrada gratuita!\n\nCuándo: Próximo domingo, de 10h a 18h\nDónde: {{address}}\n\n¡Trae a tus amigos y familiares! 🌟",
        ]),
    ),
    // Descriptions
    (
        "description.pt-BR",
        CannedSource::Text("Somos o {{business_name}}, seu {{category}} de bairro com atendimento personalizado e qualidade todos os dias. Oferecemos uma seleção cuidadosa de produtos e serviços pensados para você. Venha nos visitar em {{address}} e desfrute de uma experiência agradável em um ambiente familiar!"),
    ),
    (
        "description.en-US",
        CannedSource::Text("{{business_name}} is your neighborhood {{category}}, offering personal service and consistent quality every day. We carefully select products and services with our customers in mind. Visit us at {{address}} and enjoy a welcoming, family-friendly experience!"),
    ),
    (
        "description.es-ES",
        CannedSource::Text("Somos {{business_name}}, tu {{category}} de barrio con atención personalizada y calidad todos los días. Ofrecemos una cuidada selección de productos y servicios pensados para ti. ¡Visítanos en {{address}} y disfruta de una experiencia agradable en un ambiente familiar!"),
    ),
    // Review replies, Portuguese
    (
        "review-reply.positive.pt-BR",
        CannedSource::Text("Olá! Muito obrigado pelo seu feedback positivo. Ficamos muito felizes em saber que você teve uma experiência tão boa conosco. É gratificante saber que nosso trabalho está sendo reconhecido. Esperamos vê-lo novamente em breve!\n\nEquipe do {{business_name}}"),
    ),
    (
        "review-reply.negative.pt-BR",
        CannedSource::Text("Olá! Lamentamos muito pela experiência que você teve. Pedimos sinceras desculpas pelos inconvenientes e gostaríamos muito de ter a oportunidade de corrigir essa situação. Poderia, por favor, entrar em contato conosco diretamente para conversarmos melhor? Valorizamos seu feedback e estamos comprometidos em melhorar.\n\nEquipe do {{business_name}}"),
    ),
    (
        "review-reply.question.pt-BR",
        CannedSource::Text("Olá! Agradecemos seu contato e interesse. Para responder sua pergunta com precisão, por favor entre em contato conosco diretamente pelo telefone ou visite nossa loja em {{address}}. Teremos o maior prazer em fornecer todas as informações que você precisa.\n\nEquipe do {{business_name}}"),
    ),
    (
        "review-reply.general.pt-BR",
        CannedSource::Text("Olá! Agradecemos seu contato. Sua opinião é muito importante para nós e nos ajuda a melhorar continuamente nossos serviços. Se precisar de mais alguma informação, não hesite em nos contatar. Estamos sempre à disposição para atendê-lo da melhor forma possível.\n\nEquipe do {{business_name}}"),
    ),
    // Review replies, English
    (
        "review-reply.positive.en-US",
        CannedSource::Text("Hello! Thank you so much for your kind words. We're delighted to hear you had such a great experience with us, and it means a lot to our team. We hope to see you again soon!\n\nThe {{business_name}} team"),
    ),
    (
        "review-reply.negative.en-US",
        CannedSource::Text("Hello! We're truly sorry about your experience. Please accept our sincere apologies for the inconvenience. We'd really appreciate the chance to make things right, so please reach out to us directly so we can talk it through. Your feedback helps us improve.\n\nThe {{business_name}} team"),
    ),
    (
        "review-reply.question.en-US",
        CannedSource::Text("Hello! Thanks for reaching out. To give you an accurate answer, please contact us directly by phone or visit us at {{address}}. We'll be happy to provide all the information you need.\n\nThe {{business_name}} team"),
    ),
    (
        "review-reply.general.en-US",
        CannedSource::Text("Hello! Thank you for your feedback. Your opinion matters to us and helps us keep improving. If you need anything else, don't hesitate to get in touch. We're always here to help.\n\nThe {{business_name}} team"),
    ),
    // Review replies, Spanish
    (
        "review-reply.positive.es-ES",
        CannedSource::Text("¡Hola! Muchas gracias por tu comentario positivo. Nos alegra mucho saber que tuviste una experiencia tan buena con nosotros. ¡Esperamos verte de nuevo pronto!\n\nEl equipo de {{business_name}}"),
    ),
    (
        "review-reply.negative.es-ES",
        CannedSource::Text("¡Hola! Lamentamos mucho la experiencia que tuviste. Te pedimos sinceras disculpas por las molestias y nos gustaría tener la oportunidad de solucionarlo. ¿Podrías contactarnos directamente para hablarlo mejor? Valoramos tu opinión y estamos comprometidos con mejorar.\n\nEl equipo de {{business_name}}"),
    ),
    (
        "review-reply.question.es-ES",
        CannedSource::Text("¡Hola! Gracias por tu consulta. Para darte una respuesta precisa, por favor contáctanos directamente por teléfono o visítanos en {{address}}. Con gusto te daremos toda la información que necesites.\n\nEl equipo de {{business_name}}"),
    ),
    (
        "review-reply.general.es-ES",
        CannedSource::Text("¡Hola! Gracias por tu comentario. Tu opinión es muy importante para nosotros y nos ayuda a mejorar continuamente. Si necesitas algo más, no dudes en contactarnos. Siempre estamos a tu disposición.\n\nEl equipo de {{business_name}}"),
    ),
    // Q&A
    (
        "qa.pt-BR",
        CannedSource::Pairs(&[
            (
                "Qual o horário de funcionamento do {{business_name}}?",
                "Nosso horário de funcionamento é: {{hours}}. Em vésperas de feriados podemos estender o atendimento para melhor atender nossos clientes.",
            ),
            (
                "Onde o {{business_name}} está localizado?",
                "Estamos em {{address}}, com fácil acesso para quem vem a pé, de carro ou de transporte público.",
            ),
            (
                "Quais formas de pagamento são aceitas?",
                "Aceitamos dinheiro, cartões de crédito e débito de todas as bandeiras, PIX e vale-alimentação.",
            ),
            (
                "O estacionamento é gratuito?",
                "Sim, dispomos de estacionamento gratuito para clientes, com vagas exclusivas para idosos e pessoas com deficiência, conforme a legislação.",
            ),
            (
                "Como entro em contato com o {{business_name}}?",
                "Você pode nos ligar no telefone {{phone}} ou visitar nosso site {{website}}. Teremos prazer em ajudar!",
            ),
        ]),
    ),
    (
        "qa.en-US",
        CannedSource::Pairs(&[
            (
                "What are {{business_name}}'s opening hours?",
                "Our opening hours are: {{hours}}. We may extend our hours ahead of major holidays to better serve our customers.",
            ),
            (
                "Where is {{business_name}} located?",
                "You'll find us at {{address}}, easy to reach on foot, by car or by public transport.",
            ),
            (
                "Which payment methods do you accept?",
                "We accept cash and all major credit and debit cards.",
            ),
            (
                "Is parking free?",
                "Yes, we offer free customer parking, including accessible spaces reserved for seniors and people with disabilities.",
            ),
            (
                "How can I contact {{business_name}}?",
                "Call us at {{phone}} or visit our website at {{website}}. We're happy to help!",
            ),
        ]),
    ),
    (
        "qa.es-ES",
        CannedSource::Pairs(&[
            (
                "¿Cuál es el horario de {{business_name}}?",
                "Nuestro horario es: {{hours}}. En vísperas de festivos podemos ampliar el horario para atender mejor a nuestros clientes.",
            ),
            (
                "¿Dónde se encuentra {{business_name}}?",
                "Estamos en {{address}}, con fácil acceso a pie, en coche o en transporte público.",
            ),
            (
                "¿Qué formas de pago aceptan?",
                "Aceptamos efectivo y todas las tarjetas de crédito y débito principales.",
            ),
            (
                "¿El aparcamiento es gratuito?",
                "Sí, ofrecemos aparcamiento gratuito para clientes, con plazas reservadas para personas mayores y con discapacidad.",
            ),
            (
                "¿Cómo puedo contactar con {{business_name}}?",
                "Llámanos al {{phone}} o visita nuestra web {{website}}. ¡Estaremos encantados de ayudarte!",
            ),
        ]),
    ),
];
